//! Choosing which text a copy operation is about.

/// Selection state of a focused text field.
///
/// `start`/`end` are UTF-16 code unit offsets into `value`, as reported by a
/// text field's selection. An offset inside a surrogate pair rounds up to the
/// end of that character.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSelection<'a> {
    pub value: &'a str,
    pub start: usize,
    pub end: usize,
    /// Password fields never contribute a candidate.
    pub is_password: bool,
}

impl<'a> InputSelection<'a> {
    pub fn selected_text(&self) -> &'a str {
        if self.is_password || self.end <= self.start {
            return "";
        }
        let value = self.value;
        let byte_at = |units: usize| {
            let mut seen = 0;
            for (i, c) in value.char_indices() {
                if seen >= units {
                    return i;
                }
                seen += c.len_utf16();
            }
            value.len()
        };
        &value[byte_at(self.start)..byte_at(self.end)]
    }
}

/// Everything a copy handler can see when deciding what is being copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopySource<'a> {
    pub input: Option<InputSelection<'a>>,
    pub page_selection: &'a str,
    pub clipboard: &'a str,
}

impl<'a> CopySource<'a> {
    /// First non-empty of: focused input selection, page selection, clipboard snapshot.
    pub fn candidate(&self) -> &'a str {
        let from_input = self.input.map(|s| s.selected_text()).unwrap_or("");
        [from_input, self.page_selection, self.clipboard]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}
