//! # Outcome Reporting
//!
//! The host-facing notification contract: a severity plus human-readable
//! text. How the message is surfaced (status bar, popup, console) is the
//! host's business.

use serde::{Deserialize, Serialize};

/// How a status message should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Successful outcome.
    Info,
    /// Rejection the user can fix by adjusting the selection.
    Warning,
    /// Rejection the user must fix by correcting input.
    Error,
}

/// A human-readable outcome message for the host notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Message severity.
    pub severity: Severity,
    /// Message text.
    pub text: String,
}

impl StatusMessage {
    /// An informational (success) message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    /// A warning message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests;
