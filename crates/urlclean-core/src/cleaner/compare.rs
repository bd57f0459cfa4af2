//! Side-by-side view of an address and its cleaned form.

use super::result::{Acknowledgement, CleanResult};

/// Shown in both fields when there is no address to compare.
pub const NO_URL_PLACEHOLDER: &str = "No active tab URL.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStatus {
    /// No address was supplied at all.
    NoUrl,
    NotEligible,
    Ready(Acknowledgement),
}

impl ComparisonStatus {
    pub fn message(self) -> &'static str {
        match self {
            ComparisonStatus::NoUrl => "Open a tab with a URL to use the cleaner.",
            ComparisonStatus::NotEligible => "URL not eligible for cleaning.",
            ComparisonStatus::Ready(ack) => ack.message(),
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, ComparisonStatus::Ready(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub original: String,
    /// Cleaned value, or the original when it could not be cleaned.
    pub cleaned: String,
    pub status: ComparisonStatus,
}

impl Comparison {
    pub fn new(original: &str, result: Option<CleanResult>) -> Self {
        if result.is_none() && original.is_empty() {
            return Self {
                original: NO_URL_PLACEHOLDER.to_string(),
                cleaned: NO_URL_PLACEHOLDER.to_string(),
                status: ComparisonStatus::NoUrl,
            };
        }
        let (cleaned, status) = match result {
            Some(r) => {
                let ack = r.acknowledgement();
                (r.value, ComparisonStatus::Ready(ack))
            }
            None => (original.to_string(), ComparisonStatus::NotEligible),
        };
        Self {
            original: original.to_string(),
            cleaned,
            status,
        }
    }
}
