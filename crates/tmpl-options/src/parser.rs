//! Option string parser.
//!
//! Turns a single `key=value` string into a [`TemplateOption`]. This is the
//! only place option text is interpreted; everything past it works on enums.

use crate::error::{InvalidOption, InvalidReason};
use crate::policy::{MissingKeyPolicy, OnFaultPolicy};
use std::fmt;
use std::str::FromStr;

/// Key selecting the missing-key policy.
pub const MISSING_KEY: &str = "missingkey";

/// Key selecting the fault policy.
pub const ON_PANIC: &str = "onpanic";

/// A single resolved option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOption {
    MissingKey(MissingKeyPolicy),
    OnPanic(OnFaultPolicy),
}

impl fmt::Display for TemplateOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateOption::MissingKey(p) => write!(f, "{}={}", MISSING_KEY, p),
            TemplateOption::OnPanic(p) => write!(f, "{}={}", ON_PANIC, p),
        }
    }
}

impl FromStr for TemplateOption {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option(s)
    }
}

/// Parse one option string.
///
/// The string is split at the first `=`; the value is everything after it.
/// Keys and values are matched exactly, without trimming or case folding.
pub fn parse_option(opt: &str) -> Result<TemplateOption, InvalidOption> {
    if opt.is_empty() {
        return Err(InvalidOption::new(opt, InvalidReason::Empty));
    }

    let (key, value) = opt
        .split_once('=')
        .ok_or_else(|| InvalidOption::new(opt, InvalidReason::MissingSeparator))?;

    let unknown_value = || {
        InvalidOption::new(
            opt,
            InvalidReason::UnknownValue {
                key: key.to_string(),
                value: value.to_string(),
            },
        )
    };

    match key {
        MISSING_KEY => MissingKeyPolicy::from_option_value(value)
            .map(TemplateOption::MissingKey)
            .ok_or_else(unknown_value),
        ON_PANIC => OnFaultPolicy::from_option_value(value)
            .map(TemplateOption::OnPanic)
            .ok_or_else(unknown_value),
        _ => Err(InvalidOption::new(
            opt,
            InvalidReason::UnknownKey(key.to_string()),
        )),
    }
}
