//! `urlclean intercept` – copy-buffer filter over stdin.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{Read, Write};
use urlclean_core::UrlCleaner;

/// Substitutes the cleaned URL only when cleaning changed it; anything else,
/// including bytes that are not UTF-8, passes through unchanged.
pub(crate) fn intercept_bytes<'a>(cleaner: &UrlCleaner, buf: &'a [u8]) -> Cow<'a, [u8]> {
    let Ok(text) = std::str::from_utf8(buf) else {
        tracing::debug!(len = buf.len(), "copy buffer is not utf-8, passing through");
        return Cow::Borrowed(buf);
    };
    match cleaner.copy_substitute(text) {
        Some(cleaned) => {
            tracing::info!("substituted copied url");
            Cow::Owned(cleaned.into_bytes())
        }
        None => Cow::Borrowed(buf),
    }
}

pub fn run_intercept<R: Read, W: Write>(cleaner: &UrlCleaner, mut input: R, mut out: W) -> Result<i32> {
    let mut buf = Vec::new();
    input
        .read_to_end(&mut buf)
        .context("read copy buffer from stdin")?;

    out.write_all(&intercept_bytes(cleaner, &buf))?;
    out.flush()?;
    Ok(0)
}
