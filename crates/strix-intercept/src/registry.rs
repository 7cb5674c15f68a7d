//! Interception registry.
//!
//! Filters are registered once at startup; after that the registry is only
//! read. Evaluation is the hot path: it must stay a handful of string
//! comparisons per filter, with no allocation on the allow path.

use crate::filter::RequestFilter;
use crate::request::Request;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Outcome of running a request through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Request may proceed to the network layer.
    Allow,
    /// Request is vetoed before dispatch.
    Block {
        /// Name of the filter that vetoed the request.
        filter: String,
    },
}

impl Decision {
    /// True if the decision is a block.
    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }
}

/// Evaluation counters, shared across threads.
#[derive(Debug, Default)]
pub struct RegistryStats {
    total: AtomicU64,
    blocked: AtomicU64,
}

impl RegistryStats {
    /// Total requests evaluated.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Requests that were blocked.
    pub fn blocked(&self) -> u64 {
        self.blocked.load(Ordering::Relaxed)
    }
}

/// Registry of request filters consulted before every network dispatch.
#[derive(Default)]
pub struct InterceptRegistry {
    filters: Vec<Box<dyn RequestFilter>>,
    stats: RegistryStats,
}

impl InterceptRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter. Called once per filter at startup, before the
    /// host starts dispatching requests; registration order is evaluation
    /// order.
    pub fn register(&mut self, filter: Box<dyn RequestFilter>) {
        debug!("registered request filter: {}", filter.name());
        self.filters.push(filter);
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True if no filters are registered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run the request through all filters; first block wins.
    pub fn evaluate(&self, request: &Request) -> Decision {
        self.stats.total.fetch_add(1, Ordering::Relaxed);

        for filter in &self.filters {
            if filter.evaluate(request) {
                self.stats.blocked.fetch_add(1, Ordering::Relaxed);
                debug!("blocked by {}: {}", filter.name(), request);
                return Decision::Block {
                    filter: filter.name().to_string(),
                };
            }
        }

        Decision::Allow
    }

    /// Evaluation counters.
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::YoutubeAdFilter;

    struct BlockHost(&'static str);

    impl RequestFilter for BlockHost {
        fn name(&self) -> &str {
            "block-host"
        }

        fn evaluate(&self, request: &Request) -> bool {
            request.host() == self.0
        }
    }

    #[test]
    fn test_empty_registry_allows() {
        let registry = InterceptRegistry::new();
        let decision = registry.evaluate(&Request::new("example.com", "/", ""));
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn test_first_block_wins() {
        let mut registry = InterceptRegistry::new();
        registry.register(Box::new(BlockHost("bad.example")));
        registry.register(Box::new(YoutubeAdFilter));

        let decision = registry.evaluate(&Request::new("bad.example", "/", ""));
        assert_eq!(
            decision,
            Decision::Block {
                filter: "block-host".to_string()
            }
        );
    }

    #[test]
    fn test_registered_ad_filter_blocks() {
        let mut registry = InterceptRegistry::new();
        registry.register(Box::new(YoutubeAdFilter));

        let ad = Request::new("www.youtube.com", "/get_video_info", "v=1&adformat=2");
        assert!(registry.evaluate(&ad).is_block());

        let video = Request::new("www.youtube.com", "/watch", "v=1");
        assert_eq!(registry.evaluate(&video), Decision::Allow);
    }

    #[test]
    fn test_stats_count_evaluations() {
        let mut registry = InterceptRegistry::new();
        registry.register(Box::new(YoutubeAdFilter));

        registry.evaluate(&Request::new("example.com", "/", ""));
        registry.evaluate(&Request::new("www.youtube.com", "/get_video_info", "&adformat="));
        registry.evaluate(&Request::new("www.youtube.com", "/get_video_info", ""));

        assert_eq!(registry.stats().total(), 3);
        assert_eq!(registry.stats().blocked(), 1);
    }

    #[test]
    fn test_registry_is_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<InterceptRegistry>();
    }
}
