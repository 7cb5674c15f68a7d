//! URL glob patterns for per-domain overrides.
//!
//! The host scopes overrides with `scheme://host` patterns where `*`
//! matches any run of characters, e.g. `*://app.wire.com` or
//! `https://*.example.org`.

use crate::SettingsError;
use serde::{Serialize, Serializer};
use url::Url;

/// A compiled `scheme://host` glob pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlPattern {
    raw: String,
    scheme: Glob,
    host: Glob,
}

/// A glob compiled into literal and wildcard segments.
#[derive(Debug, Clone, PartialEq)]
struct Glob {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// Text that must match exactly.
    Literal(String),
    /// `*`, matching any run of characters including the empty one.
    Wildcard,
}

impl Glob {
    fn compile(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();

        for ch in text.chars() {
            if ch == '*' {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                // Consecutive wildcards collapse into one
                if !matches!(segments.last(), Some(Segment::Wildcard)) {
                    segments.push(Segment::Wildcard);
                }
            } else {
                literal.push(ch);
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    fn matches(&self, text: &str) -> bool {
        Self::match_segments(&self.segments, text)
    }

    fn match_segments(segments: &[Segment], text: &str) -> bool {
        match segments.first() {
            None => text.is_empty(),
            Some(Segment::Literal(lit)) => match text.strip_prefix(lit.as_str()) {
                Some(rest) => Self::match_segments(&segments[1..], rest),
                None => false,
            },
            Some(Segment::Wildcard) => {
                if segments.len() == 1 {
                    return true;
                }
                // Try the rest of the pattern at every position
                for i in 0..=text.len() {
                    if text.is_char_boundary(i) && Self::match_segments(&segments[1..], &text[i..])
                    {
                        return true;
                    }
                }
                false
            }
        }
    }
}

impl UrlPattern {
    /// Compile a `scheme://host` pattern.
    pub fn parse(pattern: &str) -> Result<Self, SettingsError> {
        let invalid = |reason: &str| SettingsError::InvalidUrlPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let (scheme, host) = pattern
            .split_once("://")
            .ok_or_else(|| invalid("missing `://` separator"))?;
        if scheme.is_empty() {
            return Err(invalid("empty scheme"));
        }
        if host.is_empty() {
            return Err(invalid("empty host"));
        }
        if host.contains('/') {
            return Err(invalid("host part must not contain `/`"));
        }

        Ok(Self {
            raw: pattern.to_string(),
            scheme: Glob::compile(scheme),
            host: Glob::compile(host),
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match against a parsed URL.
    pub fn matches(&self, url: &Url) -> bool {
        self.matches_parts(url.scheme(), url.host_str().unwrap_or(""))
    }

    /// Match against pre-split scheme and host strings.
    pub fn matches_parts(&self, scheme: &str, host: &str) -> bool {
        self.scheme.matches(scheme) && self.host.matches(host)
    }
}

impl std::fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for UrlPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(u: &str) -> Url {
        Url::parse(u).unwrap()
    }

    #[test]
    fn test_any_scheme_exact_host() {
        let pattern = UrlPattern::parse("*://app.wire.com").unwrap();
        assert!(pattern.matches(&url("https://app.wire.com/conversations")));
        assert!(pattern.matches(&url("http://app.wire.com/")));
        assert!(!pattern.matches(&url("https://wire.com/")));
        assert!(!pattern.matches(&url("https://evil-app.wire.com.example/")));
    }

    #[test]
    fn test_host_wildcard() {
        let pattern = UrlPattern::parse("https://*.example.org").unwrap();
        assert!(pattern.matches(&url("https://mail.example.org/inbox")));
        assert!(pattern.matches(&url("https://a.b.example.org/")));
        assert!(!pattern.matches(&url("http://mail.example.org/")));
        assert!(!pattern.matches(&url("https://example.org/")));
    }

    #[test]
    fn test_exact_scheme_and_host() {
        let pattern = UrlPattern::parse("https://teams.microsoft.com").unwrap();
        assert!(pattern.matches_parts("https", "teams.microsoft.com"));
        assert!(!pattern.matches_parts("http", "teams.microsoft.com"));
        assert!(!pattern.matches_parts("https", "teams.microsoft.com.evil"));
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(UrlPattern::parse("app.wire.com").is_err());
        assert!(UrlPattern::parse("://host").is_err());
        assert!(UrlPattern::parse("https://").is_err());
        assert!(UrlPattern::parse("https://host/path").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let pattern = UrlPattern::parse("*://calendar.google.com").unwrap();
        assert_eq!(pattern.to_string(), "*://calendar.google.com");
    }
}
