//! strix settings model
//!
//! Flat dot-path option keys (`content.cookies.accept`) mapped to scalar,
//! string, list, or mapping values, plus per-domain overrides scoped by
//! `scheme://host` glob patterns and the shipped color theme. The tables
//! here are declarative data: the host's configuration loader reads them
//! once at startup, and deeper schema validation (does this option exist,
//! is this value in range) is the host's job, not ours.

mod overrides;
mod path;
mod pattern;
mod store;
pub mod theme;
mod value;

pub use overrides::{Overrides, SiteOverride};
pub use path::OptionPath;
pub use pattern::UrlPattern;
pub use store::Settings;
pub use value::SettingValue;

/// Errors raised while building settings tables.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid option path {path:?}: {reason}")]
    InvalidOptionPath { path: String, reason: String },

    #[error("invalid URL pattern {pattern:?}: {reason}")]
    InvalidUrlPattern { pattern: String, reason: String },
}
