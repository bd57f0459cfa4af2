//! Tracking query parameter removal.

use std::collections::HashSet;

use url::Url;

use crate::error::ConfigError;

/// Lowercase query keys considered tracking noise. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct TrackingParamSet {
    names: HashSet<String>,
}

impl TrackingParamSet {
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = HashSet::new();
        for entry in entries {
            let raw = entry.as_ref();
            let name = raw.trim().to_lowercase();
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidParam(raw.to_string()));
            }
            names.insert(name);
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `key` (any case) is a tracking parameter.
    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(&key.to_lowercase())
    }

    /// Deletes every value of every tracking key from the query.
    ///
    /// Remaining pairs keep their order and casing. The query string is only
    /// re-serialized when something was removed; an empty remainder drops the
    /// `?` entirely. Returns whether any key was removed.
    pub fn drop_tracking_params(&self, url: &mut Url) -> bool {
        if url.query().is_none() {
            return false;
        }

        let mut removed = 0usize;
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter_map(|(k, v)| {
                if self.contains(&k) {
                    removed += 1;
                    None
                } else {
                    Some((k.into_owned(), v.into_owned()))
                }
            })
            .collect();

        if removed == 0 {
            return false;
        }
        tracing::trace!(removed, kept = kept.len(), "dropping tracking params");

        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
        true
    }
}
