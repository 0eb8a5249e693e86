//! Template option configuration
//!
//! Callers that keep options as TOML text, rather than in code, can parse it
//! here. Reading that text from disk or anywhere else is left to the caller.
//! Options go through the same resolver as [`Template::option`], so a bad
//! entry fails the parse instead of falling back to defaults.
//!
//! [`Template::option`]: crate::Template::option

mod template_config;

pub use template_config::{ConfigError, TemplateConfig};
