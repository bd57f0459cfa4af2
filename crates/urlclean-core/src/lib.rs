//! urlclean core: turns page or clipboard text into a locale-neutral,
//! tracking-free URL.
//!
//! ```
//! use urlclean_core::UrlCleaner;
//!
//! let cleaner = UrlCleaner::with_defaults()?;
//! let r = cleaner
//!     .sanitize("https://learn.microsoft.com/en-us/azure/guide?wt.mc_id=abc&foo=bar")
//!     .expect("eligible url");
//! assert!(r.changed);
//! assert_eq!(r.value, "https://learn.microsoft.com/azure/guide?foo=bar");
//! assert!(cleaner.sanitize("not a url").is_none());
//! # Ok::<(), urlclean_core::ConfigError>(())
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod logging;
pub mod url_model;

pub use cleaner::{
    Acknowledgement, CleanResult, Comparison, ComparisonStatus, CopySource, InputSelection,
    UrlCleaner, BADGE_CLEAR_DELAY, NO_URL_PLACEHOLDER,
};
pub use config::CleanerConfig;
pub use error::ConfigError;
