//! Construction-time errors for the cleaning engine.
//!
//! Sanitizing a URL never fails; ineligible input yields `None`. The only
//! errors are the ones raised while building a [`crate::UrlCleaner`] from a
//! configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Locale domains are stored in canonical form, without the `www.` label.
    #[error("locale domain {0:?} must not start with \"www.\"")]
    WwwDomain(String),

    #[error("invalid locale domain {0:?}")]
    InvalidDomain(String),

    #[error("invalid tracking parameter name {0:?}")]
    InvalidParam(String),

    #[error("locale segment pattern: {0}")]
    Pattern(#[from] regex::Error),
}
