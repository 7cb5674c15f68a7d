//! strix request interception
//!
//! The host runs every outbound request past a registry of filters before
//! the request reaches the network layer. Filters are pure predicates over
//! the request's URL components; the first filter that votes to block wins.
//!
//! Flow:
//! 1. Host constructs a [`Request`] from its own URL parser
//! 2. Registry runs registered filters in registration order
//! 3. First block → [`Decision::Block`], no further filters consulted
//! 4. No match → [`Decision::Allow`]

mod filter;
mod registry;
mod request;

pub use filter::{RequestFilter, YoutubeAdFilter};
pub use registry::{Decision, InterceptRegistry, RegistryStats};
pub use request::Request;
