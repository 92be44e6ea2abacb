//! Command-line arguments. Flags override the settings file.

use clap::Parser;

use crate::config::Settings;
use crate::state::PAGE_SIZES;

/// Terminal client for an inventory management backend.
#[derive(Debug, Parser)]
#[command(name = "ventry", version, about)]
pub struct Args {
    /// Base URL of the inventory backend.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Initial page size (5, 10, or 20).
    #[arg(long, value_name = "N")]
    pub page_size: Option<u64>,

    /// Log filter (e.g. `info`, `debug`, `ventry=trace`).
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Layer these flags over `settings`, ignoring invalid values.
    #[must_use]
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(url) = self.api_url {
            if !url.trim().is_empty() {
                settings.api_base_url = url.trim().to_string();
            }
        }
        if let Some(n) = self.page_size {
            if PAGE_SIZES.contains(&n) {
                settings.page_size_default = n;
            }
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let args = Args {
            api_url: Some("http://api.lan:9000/".into()),
            page_size: Some(20),
            log_level: "info".into(),
        };
        let s = args.apply(Settings::default());
        assert_eq!(s.api_base_url, "http://api.lan:9000/");
        assert_eq!(s.page_size_default, 20);
    }

    #[test]
    fn invalid_page_size_keeps_default() {
        let args = Args {
            api_url: None,
            page_size: Some(13),
            log_level: "info".into(),
        };
        let s = args.apply(Settings::default());
        assert_eq!(s.page_size_default, 10);
    }
}
