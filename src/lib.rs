//! Template runtime policy
//!
//! Template objects carry the two policies a rendering engine consults when
//! something goes wrong mid-render: a map indexed with an absent key, and a
//! template function that faults. Both are chosen with option strings, in
//! code or parsed from TOML text.

pub mod config;
pub mod template;

pub use config::{ConfigError, TemplateConfig};
pub use template::Template;
pub use tmpl_options::{
    apply_options, parse_option, InvalidOption, InvalidReason, MissingKeyPolicy, OnFaultPolicy,
    PolicyStore, TemplateOption,
};
