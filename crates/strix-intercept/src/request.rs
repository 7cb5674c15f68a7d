//! Request view handed to filters.

use serde::{Deserialize, Serialize};

/// URL components of a single outbound request under evaluation.
///
/// Constructed by the host immediately before the filters run and dropped
/// right after. The host's URL parser guarantees well-formed components;
/// any of them may be empty. Filters borrow the request for the duration
/// of one `evaluate` call and never retain or mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    host: String,
    path: String,
    query: String,
}

impl Request {
    /// Create a request from pre-parsed URL components.
    pub fn new(
        host: impl Into<String>,
        path: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            query: query.into(),
        }
    }

    /// Domain name, e.g. `www.youtube.com`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// URL path, e.g. `/get_video_info`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string without the leading `?`, not split into pairs.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}{}", self.host, self.path)
        } else {
            write!(f, "{}{}?{}", self.host, self.path, self.query)
        }
    }
}
