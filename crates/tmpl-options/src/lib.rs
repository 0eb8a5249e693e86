//! Runtime policy options for text templates.
//!
//! A template carries two policies into rendering: what to do when a map is
//! indexed with an absent key, and what to do when a template function
//! faults. Callers select them with `key=value` option strings:
//!
//! - `missingkey=default` or `missingkey=invalid`: continue; the result
//!   prints as `<no value>`.
//! - `missingkey=zero`: use the zero value of the map's element type.
//! - `missingkey=error`: stop rendering with an error.
//! - `onpanic=recover`: catch the fault and return it as an error.
//! - `onpanic=nop`: let the fault reach the caller.
//!
//! Anything else is rejected with [`InvalidOption`].

mod error;
mod parser;
mod policy;
mod store;

pub use error::{InvalidOption, InvalidReason};
pub use parser::{parse_option, TemplateOption, MISSING_KEY, ON_PANIC};
pub use policy::{MissingKeyPolicy, OnFaultPolicy};
pub use store::PolicyStore;

use tracing::debug;

/// Resolve `options` in order against `store`.
///
/// Each accepted option overwrites one field; later options win. Stops at
/// the first rejected option, leaving earlier ones applied and later ones
/// unread.
pub fn apply_options<I, S>(store: &mut PolicyStore, options: I) -> Result<(), InvalidOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for opt in options {
        let parsed = parse_option(opt.as_ref())?;
        store.apply(parsed);
        debug!(option = %parsed, "applied template option");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_each_recognized_option() {
        let cases = [
            ("missingkey=invalid", Some(MissingKeyPolicy::Invalid), None),
            ("missingkey=default", Some(MissingKeyPolicy::Invalid), None),
            ("missingkey=zero", Some(MissingKeyPolicy::ZeroValue), None),
            ("missingkey=error", Some(MissingKeyPolicy::Error), None),
            ("onpanic=recover", None, Some(OnFaultPolicy::Recover)),
            ("onpanic=nop", None, Some(OnFaultPolicy::NoRecover)),
        ];
        for (opt, missing_key, on_fault) in cases {
            let mut store = PolicyStore::new();
            apply_options(&mut store, [opt]).unwrap();
            if let Some(expected) = missing_key {
                assert_eq!(store.current_missing_key_policy(), expected, "option: {}", opt);
            }
            if let Some(expected) = on_fault {
                assert_eq!(store.current_fault_policy(), expected, "option: {}", opt);
            }
        }
    }

    #[test]
    fn test_empty_sequence_keeps_defaults() {
        let mut store = PolicyStore::new();
        apply_options(&mut store, Vec::<String>::new()).unwrap();
        assert_eq!(store, PolicyStore::default());
    }

    #[test]
    fn test_reject_empty_string() {
        let mut store = PolicyStore::new();
        let err = apply_options(&mut store, [""]).unwrap_err();
        assert_eq!(err.reason(), &InvalidReason::Empty);
    }

    #[test]
    fn test_reject_missing_equals() {
        let mut store = PolicyStore::new();
        let err = apply_options(&mut store, ["onpanic"]).unwrap_err();
        assert_eq!(err.option(), "onpanic");
        assert_eq!(err.reason(), &InvalidReason::MissingSeparator);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = PolicyStore::new();
        apply_options(&mut store, ["missingkey=zero", "missingkey=error"]).unwrap();
        assert_eq!(store.current_missing_key_policy(), MissingKeyPolicy::Error);
    }

    #[test]
    fn test_rejected_value_leaves_field_unchanged() {
        let mut store = PolicyStore::new();
        apply_options(&mut store, ["missingkey=zero"]).unwrap();

        let err = apply_options(&mut store, ["missingkey=bogus"]).unwrap_err();
        assert_eq!(err.option(), "missingkey=bogus");
        assert_eq!(store.current_missing_key_policy(), MissingKeyPolicy::ZeroValue);
    }

    #[test]
    fn test_independent_fields() {
        let mut store = PolicyStore::new();
        apply_options(&mut store, ["onpanic=nop", "missingkey=error"]).unwrap();
        assert_eq!(store.current_fault_policy(), OnFaultPolicy::NoRecover);
        assert_eq!(store.current_missing_key_policy(), MissingKeyPolicy::Error);
    }

    #[test]
    fn test_stops_at_first_rejection() {
        let mut store = PolicyStore::new();
        let err = apply_options(
            &mut store,
            ["onpanic=nop", "missingkey=maybe", "missingkey=error"],
        )
        .unwrap_err();

        assert_eq!(err.option(), "missingkey=maybe");
        // Earlier option stays applied
        assert_eq!(store.current_fault_policy(), OnFaultPolicy::NoRecover);
        // Later option never ran
        assert_eq!(store.current_missing_key_policy(), MissingKeyPolicy::Invalid);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let opts = vec!["missingkey=zero".to_string(), "onpanic=nop".to_string()];
        let mut store = PolicyStore::new();
        apply_options(&mut store, &opts).unwrap();
        assert_eq!(store.current_missing_key_policy(), MissingKeyPolicy::ZeroValue);
    }

    #[test]
    fn test_to_options_round_trip() {
        let mut store = PolicyStore::new();
        apply_options(&mut store, ["missingkey=zero", "onpanic=nop"]).unwrap();

        let mut replay = PolicyStore::new();
        apply_options(&mut replay, store.to_options()).unwrap();
        assert_eq!(replay, store);
    }
}
