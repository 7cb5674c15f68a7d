//! The configuration strix ships with.
//!
//! One builder chain, grouped the way the profile reads: theme, ui,
//! general behavior, privacy, urls, per-domain overrides, keys. The
//! command strings are host commands; external helpers (terminal, editor,
//! file picker, password manager, video player) appear only as opaque
//! argv vectors.

use crate::builder::{Profile, ProfileError};
use strix_intercept::{RequestFilter, YoutubeAdFilter};
use strix_settings::SettingValue;
use strix_settings::theme::MOCHA;

/// Search template used for both the default engine and the `?` bang.
const SEARCH: &str = "https://google.com/search?q={}";

/// Local page shown on startup and for new tabs.
const BLANK_PAGE: &str = "~/.config/strix/blank.html";

/// Build the default profile.
pub fn default_profile() -> Result<Profile, ProfileError> {
    Profile::builder()
        .with_dark_theme(MOCHA)
        // ui
        .set("colors.webpage.preferred_color_scheme", "dark")
        .set("completion.shrink", true)
        .set("completion.use_best_match", true)
        .set("downloads.position", "bottom")
        .set("downloads.remove_finished", 10000)
        .set(
            "statusbar.widgets",
            SettingValue::list(["progress", "keypress", "url", "history"]),
        )
        .set("scrolling.bar", "always")
        .set("tabs.position", "left")
        .set("tabs.title.format", "{index}: {audio}{current_title}")
        .set("tabs.title.format_pinned", "{index}: {audio}{current_title}")
        // general
        .set("auto_save.session", true)
        .set("content.default_encoding", "utf-8")
        .set("content.javascript.clipboard", "access")
        .set("content.notifications.enabled", true)
        .set(
            "editor.command",
            SettingValue::list(["kitty", "kak", "-e", "exec {line}g{column0}l", "{}"]),
        )
        .set("fileselect.handler", "external")
        .set(
            "fileselect.single_file.command",
            SettingValue::list(["kitty", "sh", "-c", "xplr > {}"]),
        )
        .set(
            "fileselect.multiple_files.command",
            SettingValue::list(["kitty", "sh", "-c", "xplr > {}"]),
        )
        .set("downloads.location.prompt", false)
        .set("input.insert_mode.auto_load", true)
        .set("spellcheck.languages", SettingValue::list(["en-US"]))
        .set("tabs.show", "multiple")
        .set("tabs.last_close", "close")
        .set("tabs.mousewheel_switching", false)
        // privacy
        .set("content.cookies.accept", "no-3rdparty")
        .set(
            "content.webrtc_ip_handling_policy",
            "default-public-interface-only",
        )
        // urls
        .set(
            "url.searchengines",
            SettingValue::map([("DEFAULT", SEARCH), ("?", SEARCH)]),
        )
        .set("url.default_page", BLANK_PAGE)
        .set("url.start_pages", SettingValue::list([BLANK_PAGE]))
        // per-domain settings
        .set_for_site(
            "content.register_protocol_handler",
            true,
            "*://calendar.google.com",
        )
        .set_for_site(
            "content.register_protocol_handler",
            false,
            "*://outlook.office365.com",
        )
        .set_for_site("content.media.audio_video_capture", true, "*://app.wire.com")
        .set_for_site("content.media.audio_capture", true, "*://app.wire.com")
        .set_for_site("content.media.video_capture", true, "*://app.wire.com")
        .set_for_site("content.desktop_capture", true, "*://app.wire.com")
        .set_for_site(
            "content.notifications.show_origin",
            false,
            "*://app.wire.com",
        )
        .set_for_site(
            "content.register_protocol_handler",
            true,
            "*://teams.microsoft.com",
        )
        .set_for_site(
            "content.media.audio_video_capture",
            true,
            "*://teams.microsoft.com",
        )
        .set_for_site(
            "content.media.audio_capture",
            true,
            "*://teams.microsoft.com",
        )
        .set_for_site(
            "content.media.video_capture",
            true,
            "*://teams.microsoft.com",
        )
        .set_for_site("content.desktop_capture", true, "*://teams.microsoft.com")
        .set_for_site("content.cookies.accept", "all", "*://teams.microsoft.com")
        // keys
        .bind(",d", "download-open")
        .bind(",m", "hint links spawn cglaunch mpv '{hint-url}'")
        .bind(
            ",p",
            "spawn --userscript qute-pass --username-target secret \
             --username-pattern 'user: (.+)' --dmenu-invocation 'dmenu -p credentials'",
        )
        .bind(
            ",P",
            "spawn --userscript qute-pass --username-target secret \
             --username-pattern 'user: (.+)' --dmenu-invocation 'dmenu -p password' \
             --password-only",
        )
        .bind(",b", "config-cycle colors.webpage.bg '#1d2021' 'white'")
        .bind(";I", "hint images download")
        .bind("<Ctrl-Shift-J>", "tab-move +")
        .bind("<Ctrl-Shift-K>", "tab-move -")
        .bind("M", "nop")
        .bind("co", "nop")
        .bind("<Shift-Escape>", "fake-key <Escape>")
        .bind("o", "cmd-set-text -s :open -s")
        .bind("O", "cmd-set-text -s :open -t -s")
        .bind("xt", "config-cycle tabs.show always never")
        .bind("xs", "config-cycle statusbar.show always never")
        .bind(
            "xx",
            "config-cycle tabs.show always never;; config-cycle statusbar.show always never",
        )
        .build()
}

/// Request filters registered alongside the default profile.
pub fn default_filters() -> Vec<Box<dyn RequestFilter>> {
    vec![Box::new(YoutubeAdFilter)]
}
