//! Per-domain option overrides.

use crate::path::OptionPath;
use crate::pattern::UrlPattern;
use crate::value::SettingValue;
use serde::Serialize;
use url::Url;

/// One per-domain exception to a global option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOverride {
    pub option: OptionPath,
    pub value: SettingValue,
    pub pattern: UrlPattern,
}

/// Ordered table of per-domain overrides.
///
/// Resolution scans the table in order; when several overrides for the
/// same option match a URL, the last one added wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Overrides {
    entries: Vec<SiteOverride>,
}

impl Overrides {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an override.
    pub fn push(&mut self, option: OptionPath, value: SettingValue, pattern: UrlPattern) {
        self.entries.push(SiteOverride {
            option,
            value,
            pattern,
        });
    }

    /// Resolve an option for a URL, if any override matches.
    pub fn lookup(&self, option: &str, url: &Url) -> Option<&SettingValue> {
        self.entries
            .iter()
            .rev()
            .find(|ov| ov.option.as_str() == option && ov.pattern.matches(url))
            .map(|ov| &ov.value)
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no overrides are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate overrides in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SiteOverride> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> OptionPath {
        OptionPath::parse(p).unwrap()
    }

    fn pattern(p: &str) -> UrlPattern {
        UrlPattern::parse(p).unwrap()
    }

    fn url(u: &str) -> Url {
        Url::parse(u).unwrap()
    }

    #[test]
    fn test_lookup_matches_pattern() {
        let mut overrides = Overrides::new();
        overrides.push(
            path("content.register_protocol_handler"),
            true.into(),
            pattern("*://calendar.google.com"),
        );
        overrides.push(
            path("content.register_protocol_handler"),
            false.into(),
            pattern("*://outlook.office365.com"),
        );

        let calendar = url("https://calendar.google.com/calendar");
        assert_eq!(
            overrides
                .lookup("content.register_protocol_handler", &calendar)
                .and_then(SettingValue::as_bool),
            Some(true)
        );

        let outlook = url("https://outlook.office365.com/mail");
        assert_eq!(
            overrides
                .lookup("content.register_protocol_handler", &outlook)
                .and_then(SettingValue::as_bool),
            Some(false)
        );

        let other = url("https://example.com/");
        assert!(
            overrides
                .lookup("content.register_protocol_handler", &other)
                .is_none()
        );
    }

    #[test]
    fn test_unrelated_option_not_resolved() {
        let mut overrides = Overrides::new();
        overrides.push(
            path("content.desktop_capture"),
            true.into(),
            pattern("*://app.wire.com"),
        );

        let wire = url("https://app.wire.com/");
        assert!(overrides.lookup("content.media.audio_capture", &wire).is_none());
    }

    #[test]
    fn test_last_matching_override_wins() {
        let mut overrides = Overrides::new();
        overrides.push(path("content.cookies.accept"), "no-3rdparty".into(), pattern("*://*"));
        overrides.push(
            path("content.cookies.accept"),
            "all".into(),
            pattern("*://teams.microsoft.com"),
        );

        let teams = url("https://teams.microsoft.com/chat");
        assert_eq!(
            overrides
                .lookup("content.cookies.accept", &teams)
                .and_then(SettingValue::as_str),
            Some("all")
        );
    }
}
