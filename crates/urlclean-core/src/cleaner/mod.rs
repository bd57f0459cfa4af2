//! URL cleaning engine.
//!
//! [`UrlCleaner`] owns the immutable tables (locale domains, tracking keys,
//! compiled locale pattern) and runs the pipeline for each input:
//! validate, strip locale segment on supported hosts, drop tracking keys,
//! serialize. It holds no mutable state and can be shared across threads.

mod compare;
mod copy;
mod result;

pub use compare::{Comparison, ComparisonStatus, NO_URL_PLACEHOLDER};
pub use copy::{CopySource, InputSelection};
pub use result::{Acknowledgement, CleanResult, BADGE_CLEAR_DELAY};

use crate::config::CleanerConfig;
use crate::error::ConfigError;
use crate::url_model::{self, LocaleDomainSet, LocalePattern, TrackingParamSet};

#[derive(Debug, Clone)]
pub struct UrlCleaner {
    locale_domains: LocaleDomainSet,
    locale_pattern: LocalePattern,
    tracking_params: TrackingParamSet,
}

impl UrlCleaner {
    /// Builds the engine from configuration. All tables are validated and
    /// compiled here, never per call.
    pub fn new(cfg: &CleanerConfig) -> Result<Self, ConfigError> {
        let cleaner = Self {
            locale_domains: LocaleDomainSet::from_entries(&cfg.locale_domains)?,
            locale_pattern: LocalePattern::new()?,
            tracking_params: TrackingParamSet::from_entries(&cfg.tracking_params)?,
        };
        tracing::debug!(
            locale_domains = cleaner.locale_domains.len(),
            tracking_params = cleaner.tracking_params.len(),
            "url cleaner ready"
        );
        Ok(cleaner)
    }

    /// Engine over the built-in domain and parameter tables.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(&CleanerConfig::default())
    }

    pub fn locale_domains(&self) -> &LocaleDomainSet {
        &self.locale_domains
    }

    pub fn tracking_params(&self) -> &TrackingParamSet {
        &self.tracking_params
    }

    /// Cleans `raw` if it is an eligible http(s) URL.
    ///
    /// Returns `None` for anything that is not (empty, contains whitespace,
    /// unparsable, other scheme). Never panics on any input.
    pub fn sanitize(&self, raw: &str) -> Option<CleanResult> {
        let mut url = url_model::validate(raw)?;

        let host_supported = url
            .host_str()
            .is_some_and(|host| self.locale_domains.supports_locale_stripping(host));
        let locale_changed = host_supported && self.locale_pattern.strip_locale_segment(&mut url);
        let query_changed = self.tracking_params.drop_tracking_params(&mut url);

        let result = CleanResult {
            changed: locale_changed || query_changed,
            value: url.into(),
        };
        tracing::debug!(
            changed = result.changed,
            locale_changed,
            query_changed,
            "sanitized {}",
            result.value
        );
        Some(result)
    }

    /// Replacement text for a copy operation, only when cleaning changed something.
    ///
    /// `None` means the original copy should go through untouched.
    pub fn copy_substitute(&self, text: &str) -> Option<String> {
        self.sanitize(text)
            .filter(|result| result.changed)
            .map(|result| result.value)
    }

    /// Picks the copy candidate from `source` and returns its substitute, if any.
    pub fn intercept_copy(&self, source: &CopySource<'_>) -> Option<String> {
        self.copy_substitute(source.candidate())
    }

    /// Original and cleaned forms side by side, with a status line.
    pub fn compare(&self, original: &str) -> Comparison {
        Comparison::new(original, self.sanitize(original))
    }
}
