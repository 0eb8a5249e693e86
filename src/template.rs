//! Template object

use tmpl_options::{apply_options, InvalidOption, MissingKeyPolicy, OnFaultPolicy, PolicyStore};

/// A named template and the runtime policy it renders under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    policy: PolicyStore,
}

impl Template {
    /// Create a template with default policy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            policy: PolicyStore::new(),
        }
    }

    /// Apply option strings in order, returning the template for chaining.
    ///
    /// Fails on the first unrecognized option. Options before it remain
    /// applied.
    pub fn option<I, S>(&mut self, opts: I) -> Result<&mut Self, InvalidOption>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        apply_options(&mut self.policy, opts)?;
        Ok(self)
    }

    /// Template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved policy store.
    pub fn policy(&self) -> &PolicyStore {
        &self.policy
    }

    /// Policy for a map lookup with an absent key.
    pub fn missing_key_policy(&self) -> MissingKeyPolicy {
        self.policy.current_missing_key_policy()
    }

    /// Policy for a fault raised inside a template function.
    pub fn fault_policy(&self) -> OnFaultPolicy {
        self.policy.current_fault_policy()
    }
}
