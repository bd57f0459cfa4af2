//! Input eligibility: only whitespace-free http(s) URLs are processed.

use url::Url;

/// Whitespace as browsers define it for `String.prototype.trim` and `\s`:
/// Unicode `Zs` plus tab, line terminators and the byte-order mark. Unlike
/// `char::is_whitespace`, U+0085 is not included and U+FEFF is.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parses `raw` into a URL if it is an eligible http(s) address.
///
/// Returns `None` when the trimmed text is empty, contains any whitespace,
/// does not parse, or uses a scheme other than `http`/`https`. Text with
/// embedded spaces is treated as prose, never auto-corrected.
pub fn validate(raw: &str) -> Option<Url> {
    let trimmed = raw.trim_matches(is_js_whitespace);
    if trimmed.is_empty() || trimmed.chars().any(is_js_whitespace) {
        return None;
    }

    let url = match Url::parse(trimmed) {
        Ok(u) => u,
        Err(e) => {
            tracing::trace!("not a url ({}): {:?}", e, trimmed);
            return None;
        }
    };

    match url.scheme() {
        "http" | "https" => Some(url),
        other => {
            tracing::trace!(scheme = other, "unsupported scheme");
            None
        }
    }
}
