use crate::model::Screen;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// User preferences loaded from `~/.callcenter-tui/config.json`
///
/// The file is optional; a missing or unreadable config falls back to the
/// defaults. No domain data is ever persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Screen shown after the splash: "call-logs" or "campaign-results"
    pub default_screen: String,
    /// chrono format string for table and detail timestamps
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_screen: "call-logs".to_string(),
            date_format: "%b %e, %Y %H:%M".to_string(),
        }
    }
}

impl Config {
    fn config_path() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".callcenter-tui").join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Resolve the configured default screen
    pub fn default_screen(&self) -> Screen {
        match self.default_screen.as_str() {
            "campaign-results" => Screen::CampaignResults,
            _ => Screen::CallLogs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_resolution() {
        let mut config = Config::default();
        assert_eq!(config.default_screen(), Screen::CallLogs);

        config.default_screen = "campaign-results".to_string();
        assert_eq!(config.default_screen(), Screen::CampaignResults);

        // Unknown values fall back to the call log
        config.default_screen = "bogus".to_string();
        assert_eq!(config.default_screen(), Screen::CallLogs);
    }

    #[test]
    fn test_config_path_location() {
        if let Some(path) = Config::config_path() {
            assert!(path.ends_with(".callcenter-tui/config.json"));
        }
    }

    #[test]
    fn test_config_round_trip_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_screen, config.default_screen);
        assert_eq!(parsed.date_format, config.date_format);
    }
}
