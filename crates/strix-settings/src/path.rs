//! Option paths.

use crate::SettingsError;
use serde::{Serialize, Serializer};

/// A flat dot-separated option key, e.g. `content.cookies.accept`.
///
/// Validation here is purely syntactic: non-empty segments of lowercase
/// ASCII letters, digits, and underscores. Whether the option actually
/// exists in the host's schema is checked by the host at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionPath(String);

impl OptionPath {
    /// Parse and validate an option path.
    pub fn parse(path: &str) -> Result<Self, SettingsError> {
        if path.is_empty() {
            return Err(SettingsError::InvalidOptionPath {
                path: path.to_string(),
                reason: "empty path".to_string(),
            });
        }

        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(SettingsError::InvalidOptionPath {
                    path: path.to_string(),
                    reason: "empty segment".to_string(),
                });
            }
            if let Some(bad) = segment
                .chars()
                .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '_')
            {
                return Err(SettingsError::InvalidOptionPath {
                    path: path.to_string(),
                    reason: format!("invalid character {bad:?}"),
                });
            }
        }

        Ok(Self(path.to_string()))
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OptionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for OptionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        assert!(OptionPath::parse("content.cookies.accept").is_ok());
        assert!(OptionPath::parse("tabs.title.format_pinned").is_ok());
        assert!(OptionPath::parse("url.searchengines").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert!(OptionPath::parse("").is_err());
        assert!(OptionPath::parse("content..accept").is_err());
        assert!(OptionPath::parse(".leading").is_err());
        assert!(OptionPath::parse("trailing.").is_err());
        assert!(OptionPath::parse("Content.Cookies").is_err());
        assert!(OptionPath::parse("tabs position").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let path = OptionPath::parse("statusbar.widgets").unwrap();
        assert_eq!(path.to_string(), "statusbar.widgets");
        assert_eq!(path.as_str(), "statusbar.widgets");
    }
}
