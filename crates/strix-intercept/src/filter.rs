//! Request filters.
//!
//! A filter is a pure predicate over one request: `true` means block.
//! Filters must not perform I/O, spawn processes, or touch shared mutable
//! state; the registry may invoke them concurrently for independent
//! requests.

use crate::request::Request;

/// A request-inspection hook registered with the interception registry.
pub trait RequestFilter: Send + Sync {
    /// Short name used in block decisions and logs.
    fn name(&self) -> &str;

    /// Decide whether the request should be blocked.
    ///
    /// Must be deterministic in the request alone and must accept any
    /// string values for host, path, and query, including empty ones.
    fn evaluate(&self, request: &Request) -> bool;
}

/// Blocks YouTube's `get_video_info` ad-delivery requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoutubeAdFilter;

impl RequestFilter for YoutubeAdFilter {
    fn name(&self) -> &str {
        "youtube-ads"
    }

    fn evaluate(&self, request: &Request) -> bool {
        // The query check is a raw substring test, not a parameter lookup:
        // it only fires when adformat is preceded by a literal `&`, so a
        // query where adformat is the first parameter slips through.
        request.host() == "www.youtube.com"
            && request.path() == "/get_video_info"
            && request.query().contains("&adformat=")
    }
}
