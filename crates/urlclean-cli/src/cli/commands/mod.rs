//! CLI command handlers, one file per command.

mod clean;
mod compare;
mod completions;
mod config;
mod intercept;
mod man;

pub use clean::run_clean;
pub use compare::run_compare;
pub use completions::run_completions;
pub use config::run_config;
pub use intercept::run_intercept;
pub use man::run_man;
