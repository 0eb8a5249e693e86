//! Option rejection types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable reason an option string was rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "detail")]
pub enum InvalidReason {
    /// The option string was empty.
    #[serde(rename = "EMPTY")]
    Empty,

    /// No `=` between key and value.
    #[serde(rename = "MISSING_SEPARATOR")]
    MissingSeparator,

    /// Key is not a known option.
    #[serde(rename = "UNKNOWN_KEY")]
    UnknownKey(String),

    /// Key is known but the value is not one of its choices.
    #[serde(rename = "UNKNOWN_VALUE")]
    UnknownValue { key: String, value: String },
}

impl InvalidReason {
    /// Get a machine-readable string representation.
    pub fn to_code(&self) -> String {
        match self {
            InvalidReason::Empty => "EMPTY".to_string(),
            InvalidReason::MissingSeparator => "MISSING_SEPARATOR".to_string(),
            InvalidReason::UnknownKey(k) => format!("UNKNOWN_KEY:{}", k),
            InvalidReason::UnknownValue { key, value } => {
                format!("UNKNOWN_VALUE:{}={}", key, value)
            }
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Empty => write!(f, "empty option string"),
            InvalidReason::MissingSeparator => write!(f, "expected key=value"),
            InvalidReason::UnknownKey(k) => write!(f, "unknown key '{}'", k),
            InvalidReason::UnknownValue { key, value } => {
                write!(f, "unknown value '{}' for '{}'", value, key)
            }
        }
    }
}

/// An option string that could not be resolved.
///
/// Carries the offending string verbatim. Resolution stops at the first of
/// these; it is never absorbed or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized option {option:?}: {reason}")]
pub struct InvalidOption {
    option: String,
    reason: InvalidReason,
}

impl InvalidOption {
    pub(crate) fn new(option: &str, reason: InvalidReason) -> Self {
        Self {
            option: option.to_string(),
            reason,
        }
    }

    /// The rejected option string, exactly as supplied.
    pub fn option(&self) -> &str {
        &self.option
    }

    /// Why the option was rejected.
    pub fn reason(&self) -> &InvalidReason {
        &self.reason
    }
}
