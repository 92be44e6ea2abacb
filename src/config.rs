//! Settings and on-disk paths.
//!
//! Configuration lives at `~/.config/ventry/settings.conf` as simple
//! `key = value` lines. A missing file means defaults; unknown keys are
//! ignored so older binaries tolerate newer files. The `VENTRY_API_URL`
//! environment variable overrides the configured backend URL.

use std::fs;
use std::path::PathBuf;

use crate::state::{DEFAULT_PAGE_SIZE, PAGE_SIZES, SortColumn};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Resolved runtime settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the inventory backend.
    pub api_base_url: String,
    /// Page size the table starts with.
    pub page_size_default: u64,
    /// Sort column activated at startup, if any.
    pub sort_default: Option<SortColumn>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size_default: DEFAULT_PAGE_SIZE,
            sort_default: None,
        }
    }
}

/// Per-user configuration directory (`~/.config/ventry`).
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("ventry"));
        }
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("ventry"))
}

/// Directory log files are written to (`<config_dir>/logs`).
#[must_use]
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Load settings from disk, falling back to defaults, then apply the
/// environment override.
#[must_use]
pub fn load() -> Settings {
    let mut settings = config_dir()
        .map(|dir| dir.join("settings.conf"))
        .and_then(|path| fs::read_to_string(path).ok())
        .map_or_else(Settings::default, |text| parse_settings(&text));
    if let Ok(url) = std::env::var("VENTRY_API_URL") {
        if !url.trim().is_empty() {
            settings.api_base_url = url.trim().to_string();
        }
    }
    settings
}

/// Parse `key = value` lines; `#` starts a comment.
#[must_use]
pub fn parse_settings(text: &str) -> Settings {
    let mut settings = Settings::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        match key {
            "api_base_url" => {
                if !value.is_empty() {
                    settings.api_base_url = value.to_string();
                }
            }
            "page_size_default" => {
                if let Ok(n) = value.parse::<u64>() {
                    if PAGE_SIZES.contains(&n) {
                        settings.page_size_default = n;
                    }
                }
            }
            "sort_default" => settings.sort_default = SortColumn::from_param(value),
            _ => {}
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let s = parse_settings("");
        assert_eq!(s, Settings::default());
        assert_eq!(s.api_base_url, DEFAULT_API_URL);
        assert_eq!(s.page_size_default, 10);
    }

    #[test]
    fn known_keys_are_applied() {
        let s = parse_settings(
            "# ventry settings\napi_base_url = http://inventory.lan:9000\n\
             page_size_default = 20\nsort_default = price\n",
        );
        assert_eq!(s.api_base_url, "http://inventory.lan:9000");
        assert_eq!(s.page_size_default, 20);
        assert_eq!(s.sort_default, Some(SortColumn::Price));
    }

    #[test]
    fn junk_lines_and_bad_values_are_ignored() {
        let s = parse_settings("page_size_default = 7\nnot a line\nmystery = 3\n");
        // 7 is not an offered page size.
        assert_eq!(s.page_size_default, 10);
        assert_eq!(s.api_base_url, DEFAULT_API_URL);
        assert_eq!(s.sort_default, None);
    }
}
