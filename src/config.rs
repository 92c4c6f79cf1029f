use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// ISO3 country codes, joined with `;` in the request path.
    pub countries: Vec<String>,
    pub year: String,
    pub api_base_url: String,
    /// No timeout when unset.
    pub request_timeout_seconds: Option<u64>,
    pub output_path: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            countries: ["USA", "CHN", "IND", "BRA", "DEU", "JPN", "GBR", "FRA"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            year: "2022".to_string(),
            api_base_url: "https://api.worldbank.org/v2".to_string(),
            request_timeout_seconds: None,
            output_path: "demographics.svg".to_string(),
            chart_width: 1500,
            chart_height: 600,
        }
    }
}

impl AppConfig {
    pub fn countries_param(&self) -> String {
        self.countries.join(";")
    }
}

/// Loads the config file, falling back to defaults when it does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
