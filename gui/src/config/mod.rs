// GUI configuration, embedded at compile time from assets/config/default.json.

pub mod theme;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub window: WindowSettings,
    pub history: HistorySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    /// "light" or "dark".
    pub theme: String,
    /// Tab id shown on startup, e.g. "standard".
    pub default_tab: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistorySettings {
    pub capacity: usize,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.history.capacity, 10);
        assert_eq!(config.app.default_tab, "standard");
        assert!(!config.window.title.is_empty());
    }
}
