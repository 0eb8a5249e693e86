//! Policy enums consulted by the rendering engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How to respond to indexing a map with a key that is not present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingKeyPolicy {
    /// Continue with a "no value" marker. Printed, it reads `<no value>`.
    #[default]
    #[serde(rename = "invalid", alias = "default")]
    Invalid,

    /// Use the zero value of the map's element type.
    #[serde(rename = "zero")]
    ZeroValue,

    /// Stop rendering with an error.
    #[serde(rename = "error")]
    Error,
}

impl MissingKeyPolicy {
    /// Text the engine prints for the marker produced under `Invalid`.
    pub const NO_VALUE: &'static str = "<no value>";

    /// Canonical option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingKeyPolicy::Invalid => "invalid",
            MissingKeyPolicy::ZeroValue => "zero",
            MissingKeyPolicy::Error => "error",
        }
    }

    /// Look up a `missingkey` option value. `default` is an alias of `invalid`.
    pub fn from_option_value(value: &str) -> Option<Self> {
        match value {
            "invalid" | "default" => Some(MissingKeyPolicy::Invalid),
            "zero" => Some(MissingKeyPolicy::ZeroValue),
            "error" => Some(MissingKeyPolicy::Error),
            _ => None,
        }
    }
}

impl fmt::Display for MissingKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to handle a fault raised by a template function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnFaultPolicy {
    /// Catch the fault and return it as a render error.
    #[default]
    #[serde(rename = "recover")]
    Recover,

    /// Let the fault reach the engine's caller untouched.
    #[serde(rename = "nop")]
    NoRecover,
}

impl OnFaultPolicy {
    /// Canonical option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            OnFaultPolicy::Recover => "recover",
            OnFaultPolicy::NoRecover => "nop",
        }
    }

    /// Look up an `onpanic` option value.
    pub fn from_option_value(value: &str) -> Option<Self> {
        match value {
            "recover" => Some(OnFaultPolicy::Recover),
            "nop" => Some(OnFaultPolicy::NoRecover),
            _ => None,
        }
    }
}

impl fmt::Display for OnFaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
