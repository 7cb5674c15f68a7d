//! Ordered settings table.

use crate::path::OptionPath;
use crate::value::SettingValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered table of global option assignments.
///
/// Keeps first-assignment order; assigning an already-present option
/// replaces its value in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    entries: Vec<(OptionPath, SettingValue)>,
}

impl Settings {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value to an option.
    pub fn set(&mut self, option: OptionPath, value: SettingValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(path, _)| *path == option) {
            entry.1 = value;
        } else {
            self.entries.push((option, value));
        }
    }

    /// Look up an option's value.
    pub fn get(&self, option: &str) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|(path, _)| path.as_str() == option)
            .map(|(_, value)| value)
    }

    /// Number of assigned options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate assignments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&OptionPath, &SettingValue)> {
        self.entries.iter().map(|(path, value)| (path, value))
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, value) in &self.entries {
            map.serialize_entry(path, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> OptionPath {
        OptionPath::parse(p).unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut settings = Settings::new();
        settings.set(path("tabs.position"), "left".into());
        settings.set(path("downloads.remove_finished"), 10000.into());

        assert_eq!(
            settings.get("tabs.position").and_then(SettingValue::as_str),
            Some("left")
        );
        assert_eq!(
            settings.get("downloads.remove_finished"),
            Some(&SettingValue::Int(10000))
        );
        assert_eq!(settings.get("tabs.show"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut settings = Settings::new();
        settings.set(path("tabs.show"), "always".into());
        settings.set(path("tabs.show"), "multiple".into());

        assert_eq!(settings.len(), 1);
        assert_eq!(
            settings.get("tabs.show").and_then(SettingValue::as_str),
            Some("multiple")
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut settings = Settings::new();
        settings.set(path("scrolling.bar"), "always".into());
        settings.set(path("auto_save.session"), true.into());
        settings.set(path("scrolling.bar"), "never".into());

        let keys: Vec<&str> = settings.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(keys, vec!["scrolling.bar", "auto_save.session"]);
    }
}
