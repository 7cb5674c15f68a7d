//! Profile value and builder.

use serde::Serialize;
use strix_keys::{Bindings, Command, KeySeq, KeysError};
use strix_settings::theme::{self, Palette};
use strix_settings::{
    OptionPath, Overrides, SettingValue, Settings, SettingsError, UrlPattern,
};
use tracing::info;
use url::Url;

/// Errors raised while building or exporting a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Keys(#[from] KeysError),

    #[error("profile serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The assembled startup configuration, immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    settings: Settings,
    overrides: Overrides,
    bindings: Bindings,
}

impl Profile {
    /// Start building a profile.
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::new()
    }

    /// Global option assignments.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Per-domain overrides.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Key bindings.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Effective value of an option for a page URL: the last matching
    /// per-domain override if any, otherwise the global assignment.
    pub fn value_for(&self, option: &str, url: &Url) -> Option<&SettingValue> {
        self.overrides
            .lookup(option, url)
            .or_else(|| self.settings.get(option))
    }

    /// Render the profile as JSON for a host that loads a serialized
    /// configuration file at launch.
    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Staged profile directives, validated together at [`ProfileBuilder::build`].
enum Directive {
    Set {
        option: String,
        value: SettingValue,
    },
    SetForSite {
        option: String,
        value: SettingValue,
        pattern: String,
    },
    Bind {
        sequence: String,
        command: String,
    },
}

/// Builder for [`Profile`].
///
/// Directives are staged as written and validated in one pass by
/// [`build`](Self::build), so a malformed option path, URL pattern, key
/// sequence, or command fails the whole profile before the host sees it.
#[derive(Default)]
pub struct ProfileBuilder {
    directives: Vec<Directive>,
    palette: Option<Palette>,
}

impl ProfileBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a dark color theme. Theme assignments land first, so later
    /// explicit `set` calls override individual theme colors.
    pub fn with_dark_theme(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Assign a global option.
    pub fn set(mut self, option: &str, value: impl Into<SettingValue>) -> Self {
        self.directives.push(Directive::Set {
            option: option.to_string(),
            value: value.into(),
        });
        self
    }

    /// Assign an option for URLs matching a `scheme://host` glob pattern.
    pub fn set_for_site(
        mut self,
        option: &str,
        value: impl Into<SettingValue>,
        pattern: &str,
    ) -> Self {
        self.directives.push(Directive::SetForSite {
            option: option.to_string(),
            value: value.into(),
            pattern: pattern.to_string(),
        });
        self
    }

    /// Bind a key sequence to a command string.
    pub fn bind(mut self, sequence: &str, command: &str) -> Self {
        self.directives.push(Directive::Bind {
            sequence: sequence.to_string(),
            command: command.to_string(),
        });
        self
    }

    /// Validate every staged directive and assemble the profile.
    pub fn build(self) -> Result<Profile, ProfileError> {
        let mut settings = Settings::new();
        let mut overrides = Overrides::new();
        let mut bindings = Bindings::new();

        if let Some(palette) = &self.palette {
            theme::apply_dark_theme(&mut settings, palette)?;
        }

        for directive in self.directives {
            match directive {
                Directive::Set { option, value } => {
                    settings.set(OptionPath::parse(&option)?, value);
                }
                Directive::SetForSite {
                    option,
                    value,
                    pattern,
                } => {
                    overrides.push(
                        OptionPath::parse(&option)?,
                        value,
                        UrlPattern::parse(&pattern)?,
                    );
                }
                Directive::Bind { sequence, command } => {
                    bindings.bind(KeySeq::parse(&sequence)?, Command::parse(&command)?);
                }
            }
        }

        info!(
            "profile built: {} options, {} overrides, {} bindings",
            settings.len(),
            overrides.len(),
            bindings.len()
        );

        Ok(Profile {
            settings,
            overrides,
            bindings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strix_settings::theme::MOCHA;

    #[test]
    fn test_build_collects_all_tables() {
        let profile = Profile::builder()
            .set("tabs.position", "left")
            .set_for_site("content.desktop_capture", true, "*://app.wire.com")
            .bind(",d", "download-open")
            .build()
            .unwrap();

        assert_eq!(profile.settings().len(), 1);
        assert_eq!(profile.overrides().len(), 1);
        assert_eq!(profile.bindings().len(), 1);
    }

    #[test]
    fn test_explicit_set_overrides_theme_color() {
        let profile = Profile::builder()
            .with_dark_theme(MOCHA)
            .set("colors.webpage.bg", "#000000")
            .build()
            .unwrap();

        assert_eq!(
            profile
                .settings()
                .get("colors.webpage.bg")
                .and_then(SettingValue::as_str),
            Some("#000000")
        );
        // Untouched theme colors survive
        assert_eq!(
            profile
                .settings()
                .get("colors.hints.bg")
                .and_then(SettingValue::as_str),
            Some(MOCHA.peach)
        );
    }

    #[test]
    fn test_value_for_prefers_override() {
        let profile = Profile::builder()
            .set("content.cookies.accept", "no-3rdparty")
            .set_for_site("content.cookies.accept", "all", "*://teams.microsoft.com")
            .build()
            .unwrap();

        let teams = Url::parse("https://teams.microsoft.com/chat").unwrap();
        let elsewhere = Url::parse("https://example.com/").unwrap();

        assert_eq!(
            profile
                .value_for("content.cookies.accept", &teams)
                .and_then(SettingValue::as_str),
            Some("all")
        );
        assert_eq!(
            profile
                .value_for("content.cookies.accept", &elsewhere)
                .and_then(SettingValue::as_str),
            Some("no-3rdparty")
        );
    }

    #[test]
    fn test_invalid_directives_fail_build() {
        assert!(
            Profile::builder()
                .set("Not.Valid", true)
                .build()
                .is_err()
        );
        assert!(
            Profile::builder()
                .set_for_site("content.desktop_capture", true, "app.wire.com")
                .build()
                .is_err()
        );
        assert!(Profile::builder().bind("<Ctrl-", "nop").build().is_err());
        assert!(Profile::builder().bind(",d", " ").build().is_err());
    }

    #[test]
    fn test_to_json_renders_tables() {
        let profile = Profile::builder()
            .set("statusbar.widgets", SettingValue::list(["progress", "url"]))
            .bind("<Ctrl-Shift-K>", "tab-move -")
            .build()
            .unwrap();

        let json = profile.to_json().unwrap();
        assert!(json.contains("\"statusbar.widgets\""));
        assert!(json.contains("\"<Ctrl-Shift-K>\": \"tab-move -\""));
    }
}
