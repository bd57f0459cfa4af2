//! Cleaning result and the acknowledgement shown for it.

use serde::Serialize;
use std::time::Duration;

/// How long a copy acknowledgement stays visible before it is cleared.
pub const BADGE_CLEAR_DELAY: Duration = Duration::from_millis(1500);

/// Outcome of cleaning an eligible URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanResult {
    /// True iff a locale segment or at least one tracking key was removed.
    pub changed: bool,
    /// Serialized URL; the normalized input when nothing changed.
    pub value: String,
}

impl CleanResult {
    pub fn acknowledgement(&self) -> Acknowledgement {
        if self.changed {
            Acknowledgement::Cleaned
        } else {
            Acknowledgement::AlreadyClean
        }
    }
}

/// Visual acknowledgement after copying a cleaned URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Cleaned,
    AlreadyClean,
}

impl Acknowledgement {
    pub fn badge_label(self) -> &'static str {
        match self {
            Acknowledgement::Cleaned => "CLEAN",
            Acknowledgement::AlreadyClean => "OK",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Acknowledgement::Cleaned => "#2563eb",
            Acknowledgement::AlreadyClean => "#16a34a",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Acknowledgement::Cleaned => "Ready to copy cleaned URL.",
            Acknowledgement::AlreadyClean => "URL already clean.",
        }
    }
}
