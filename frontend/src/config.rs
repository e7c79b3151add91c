use serde::{Deserialize, Serialize};
use shared::DisclosureTiming;

/// localStorage key holding an optional JSON override of [`AppConfig`]
pub const CONFIG_STORAGE_KEY: &str = "finance-miniapp.config";

/// Where transaction records come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSourceConfig {
    /// In-memory sample records, used when no backend is deployed
    Demo,
    Http { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_source: DataSourceConfig,
    pub main_button_text: String,
    pub disclosure: DisclosureTiming,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DataSourceConfig::Demo,
            main_button_text: "Confirm".to_string(),
            disclosure: DisclosureTiming::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by whatever is stored under [`CONFIG_STORAGE_KEY`]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!(target: "config", "ignoring stored config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"main_button_text": "Підтвердити"}"#).unwrap();
        assert_eq!(config.main_button_text, "Підтвердити");
        assert_eq!(config.data_source, DataSourceConfig::Demo);
        assert_eq!(config.disclosure, DisclosureTiming::default());
    }

    #[test]
    fn test_http_data_source() {
        let config = AppConfig::from_json(
            r#"{"data_source": {"kind": "http", "base_url": "https://api.example.com"}, "log_level": "debug"}"#,
        )
        .unwrap();
        assert_eq!(
            config.data_source,
            DataSourceConfig::Http {
                base_url: "https://api.example.com".to_string()
            }
        );
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        assert!(AppConfig::from_json("not json").is_err());
    }
}
