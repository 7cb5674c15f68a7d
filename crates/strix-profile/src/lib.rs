//! strix profile assembly
//!
//! A [`Profile`] is the complete declarative configuration handed to the
//! host at startup: global settings, per-domain overrides, and key
//! bindings. It is immutable once built; all mutation happens in
//! [`ProfileBuilder`], and [`default_profile`] produces the configuration
//! strix ships with. The matching request filters come from
//! [`default_filters`] and are registered into the host's interception
//! registry alongside the profile.

mod builder;
mod default;

pub use builder::{Profile, ProfileBuilder, ProfileError};
pub use default::{default_filters, default_profile};
