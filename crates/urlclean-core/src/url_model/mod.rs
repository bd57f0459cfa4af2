//! URL modeling: eligibility, host classification, path and query rewriting.
//!
//! Each piece is a pure function of its input plus an immutable table built
//! once at engine construction. [`crate::UrlCleaner`] composes them.

mod host;
mod locale;
mod query;
mod validate;

pub use host::{normalize_host, LocaleDomainSet};
pub use locale::LocalePattern;
pub use query::TrackingParamSet;
pub use validate::{is_js_whitespace, validate};
