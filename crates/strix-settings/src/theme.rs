//! Shipped dark color theme.
//!
//! The Catppuccin Mocha palette applied onto the host's `colors.*` option
//! keys. The palette is plain data; applying it is just a batch of
//! assignments into a [`Settings`] table.

use crate::SettingsError;
use crate::path::OptionPath;
use crate::store::Settings;
use tracing::debug;

/// Named colors of a theme palette, as `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: &'static str,
    pub mantle: &'static str,
    pub crust: &'static str,
    pub text: &'static str,
    pub subtext0: &'static str,
    pub subtext1: &'static str,
    pub surface0: &'static str,
    pub surface1: &'static str,
    pub surface2: &'static str,
    pub overlay0: &'static str,
    pub blue: &'static str,
    pub lavender: &'static str,
    pub sky: &'static str,
    pub teal: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub peach: &'static str,
    pub red: &'static str,
    pub mauve: &'static str,
    pub pink: &'static str,
}

/// Catppuccin Mocha.
pub const MOCHA: Palette = Palette {
    base: "#1e1e2e",
    mantle: "#181825",
    crust: "#11111b",
    text: "#cdd6f4",
    subtext0: "#a6adc8",
    subtext1: "#bac2de",
    surface0: "#313244",
    surface1: "#45475a",
    surface2: "#585b70",
    overlay0: "#6c7086",
    blue: "#89b4fa",
    lavender: "#b4befe",
    sky: "#89dceb",
    teal: "#94e2d5",
    green: "#a6e3a1",
    yellow: "#f9e2af",
    peach: "#fab387",
    red: "#f38ba8",
    mauve: "#cba6f7",
    pink: "#f5c2e7",
};

/// Apply a palette to the color options of the given settings table.
pub fn apply_dark_theme(settings: &mut Settings, palette: &Palette) -> Result<(), SettingsError> {
    let assignments: &[(&str, &str)] = &[
        // completion menu
        ("colors.completion.fg", palette.text),
        ("colors.completion.odd.bg", palette.surface0),
        ("colors.completion.even.bg", palette.base),
        ("colors.completion.category.fg", palette.blue),
        ("colors.completion.category.bg", palette.base),
        ("colors.completion.category.border.top", palette.mantle),
        ("colors.completion.category.border.bottom", palette.mantle),
        ("colors.completion.item.selected.fg", palette.text),
        ("colors.completion.item.selected.bg", palette.surface1),
        ("colors.completion.item.selected.border.top", palette.surface1),
        (
            "colors.completion.item.selected.border.bottom",
            palette.surface1,
        ),
        ("colors.completion.item.selected.match.fg", palette.peach),
        ("colors.completion.match.fg", palette.peach),
        ("colors.completion.scrollbar.fg", palette.overlay0),
        ("colors.completion.scrollbar.bg", palette.crust),
        // statusbar
        ("colors.statusbar.normal.fg", palette.text),
        ("colors.statusbar.normal.bg", palette.base),
        ("colors.statusbar.insert.fg", palette.base),
        ("colors.statusbar.insert.bg", palette.green),
        ("colors.statusbar.command.fg", palette.text),
        ("colors.statusbar.command.bg", palette.crust),
        ("colors.statusbar.passthrough.fg", palette.base),
        ("colors.statusbar.passthrough.bg", palette.sky),
        ("colors.statusbar.url.fg", palette.lavender),
        ("colors.statusbar.url.success.https.fg", palette.green),
        ("colors.statusbar.url.success.http.fg", palette.yellow),
        ("colors.statusbar.url.error.fg", palette.red),
        ("colors.statusbar.url.hover.fg", palette.sky),
        ("colors.statusbar.url.warn.fg", palette.peach),
        // tab bar
        ("colors.tabs.bar.bg", palette.crust),
        ("colors.tabs.odd.fg", palette.subtext1),
        ("colors.tabs.odd.bg", palette.mantle),
        ("colors.tabs.even.fg", palette.subtext0),
        ("colors.tabs.even.bg", palette.crust),
        ("colors.tabs.selected.odd.fg", palette.text),
        ("colors.tabs.selected.odd.bg", palette.base),
        ("colors.tabs.selected.even.fg", palette.text),
        ("colors.tabs.selected.even.bg", palette.base),
        ("colors.tabs.indicator.start", palette.blue),
        ("colors.tabs.indicator.stop", palette.green),
        ("colors.tabs.indicator.error", palette.red),
        // hints
        ("colors.hints.fg", palette.base),
        ("colors.hints.bg", palette.peach),
        ("colors.hints.match.fg", palette.subtext1),
        // messages
        ("colors.messages.info.fg", palette.text),
        ("colors.messages.info.bg", palette.base),
        ("colors.messages.warning.fg", palette.base),
        ("colors.messages.warning.bg", palette.peach),
        ("colors.messages.error.fg", palette.base),
        ("colors.messages.error.bg", palette.red),
        // downloads
        ("colors.downloads.bar.bg", palette.crust),
        ("colors.downloads.start.fg", palette.base),
        ("colors.downloads.start.bg", palette.blue),
        ("colors.downloads.stop.fg", palette.base),
        ("colors.downloads.stop.bg", palette.green),
        ("colors.downloads.error.fg", palette.red),
        // prompts and keyhints
        ("colors.prompts.fg", palette.text),
        ("colors.prompts.bg", palette.base),
        ("colors.prompts.border", palette.mantle),
        ("colors.prompts.selected.bg", palette.surface1),
        ("colors.keyhint.fg", palette.text),
        ("colors.keyhint.suffix.fg", palette.mauve),
        ("colors.keyhint.bg", palette.base),
        // webpage
        ("colors.webpage.bg", palette.base),
    ];

    for (option, color) in assignments {
        settings.set(OptionPath::parse(option)?, (*color).into());
    }

    debug!("applied dark theme: {} color options", assignments.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SettingValue;

    #[test]
    fn test_apply_sets_color_options() {
        let mut settings = Settings::new();
        apply_dark_theme(&mut settings, &MOCHA).unwrap();

        assert_eq!(
            settings
                .get("colors.webpage.bg")
                .and_then(SettingValue::as_str),
            Some("#1e1e2e")
        );
        assert_eq!(
            settings
                .get("colors.statusbar.insert.bg")
                .and_then(SettingValue::as_str),
            Some("#a6e3a1")
        );
        assert!(settings.len() >= 50);
    }

    #[test]
    fn test_all_palette_entries_are_hex() {
        let colors = [
            MOCHA.base,
            MOCHA.mantle,
            MOCHA.crust,
            MOCHA.text,
            MOCHA.subtext0,
            MOCHA.subtext1,
            MOCHA.surface0,
            MOCHA.surface1,
            MOCHA.surface2,
            MOCHA.overlay0,
            MOCHA.blue,
            MOCHA.lavender,
            MOCHA.sky,
            MOCHA.teal,
            MOCHA.green,
            MOCHA.yellow,
            MOCHA.peach,
            MOCHA.red,
            MOCHA.mauve,
            MOCHA.pink,
        ];
        for color in colors {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
