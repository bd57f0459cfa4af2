//! Leading locale path segment detection and removal.

use regex::Regex;
use url::Url;

use crate::error::ConfigError;

/// Language tag: two letters plus up to two `-`-separated subtags of 2–8 alphanumerics.
const LOCALE_SEGMENT: &str = r"^[A-Za-z]{2}(?:-[A-Za-z0-9]{2,8}){0,2}$";

/// Compiled locale segment matcher (`en`, `en-US`, `zh-Hans-CN`).
#[derive(Debug, Clone)]
pub struct LocalePattern {
    re: Regex,
}

impl LocalePattern {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            re: Regex::new(LOCALE_SEGMENT)?,
        })
    }

    pub fn is_locale(&self, segment: &str) -> bool {
        self.re.is_match(segment)
    }

    /// Removes the first non-empty path segment if it looks like a locale.
    ///
    /// Only that one segment is ever inspected; deeper segments are left alone
    /// even when they match. Returns whether the path changed.
    pub fn strip_locale_segment(&self, url: &mut Url) -> bool {
        let mut segments: Vec<&str> = url.path().split('/').collect();
        if segments.len() <= 1 {
            return false;
        }

        // Index 0 is the empty string before the leading slash.
        let Some(index) = segments
            .iter()
            .skip(1)
            .position(|s| !s.is_empty())
            .map(|i| i + 1)
        else {
            return false;
        };

        if !self.is_locale(segments[index]) {
            return false;
        }

        let removed = segments.remove(index);
        tracing::trace!(segment = removed, "dropping locale segment");

        let mut new_path = segments.join("/");
        if new_path.is_empty() {
            new_path.push('/');
        }
        url.set_path(&new_path);
        true
    }
}
