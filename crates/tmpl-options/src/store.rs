//! Per-template policy store.

use crate::parser::TemplateOption;
use crate::policy::{MissingKeyPolicy, OnFaultPolicy};
use serde::{Deserialize, Serialize};

/// The two policies a template carries into rendering.
///
/// Always holds a valid value for both fields; a fresh store has the
/// defaults `Invalid` and `Recover`. Only option resolution writes to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStore {
    #[serde(rename = "missingkey", default)]
    missing_key: MissingKeyPolicy,

    #[serde(rename = "onpanic", default)]
    on_fault: OnFaultPolicy,
}

impl PolicyStore {
    /// Create a store holding the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy for a map lookup with an absent key.
    pub fn current_missing_key_policy(&self) -> MissingKeyPolicy {
        self.missing_key
    }

    /// Policy for a fault raised inside a template function.
    pub fn current_fault_policy(&self) -> OnFaultPolicy {
        self.on_fault
    }

    /// Overwrite the single field `opt` names.
    pub fn apply(&mut self, opt: TemplateOption) {
        match opt {
            TemplateOption::MissingKey(p) => self.missing_key = p,
            TemplateOption::OnPanic(p) => self.on_fault = p,
        }
    }

    /// Canonical option strings that reproduce this store from defaults.
    pub fn to_options(&self) -> Vec<String> {
        vec![
            TemplateOption::MissingKey(self.missing_key).to_string(),
            TemplateOption::OnPanic(self.on_fault).to_string(),
        ]
    }
}
