//! Settings module
//!
//! Runtime settings for the binary and the HTTP endpoint. Every key is
//! optional; a missing key keeps its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConvertError;
use crate::generator::config::group::{
    GroupSettings, AUTO_GROUP_NAME, DEFAULT_TEST_INTERVAL, DEFAULT_TEST_URL, SELECT_GROUP_NAME,
};

fn default_log_level() -> String {
    "info".to_string()
}

fn default_listen_address() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u16 {
    25500
}

fn default_select_group() -> String {
    SELECT_GROUP_NAME.to_string()
}

fn default_auto_group() -> String {
    AUTO_GROUP_NAME.to_string()
}

fn default_test_url() -> String {
    DEFAULT_TEST_URL.to_string()
}

fn default_test_interval() -> u32 {
    DEFAULT_TEST_INTERVAL
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default = "default_select_group")]
    pub select_group: String,
    #[serde(default = "default_auto_group")]
    pub auto_group: String,
    #[serde(default = "default_test_url")]
    pub test_url: String,
    #[serde(default = "default_test_interval")]
    pub test_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
            select_group: default_select_group(),
            auto_group: default_auto_group(),
            test_url: default_test_url(),
            test_interval: default_test_interval(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML or YAML content
    ///
    /// TOML is tried first; content that is not valid TOML is read as YAML.
    pub fn load_from_content(content: &str) -> Result<Self, ConvertError> {
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        let mut settings: Settings = match toml::from_str(content) {
            Ok(settings) => settings,
            Err(toml_err) => serde_yaml::from_str(content).map_err(|yaml_err| {
                ConvertError::Settings(format!(
                    "not valid TOML ({}) or YAML ({})",
                    toml_err,
                    yaml_err
                ))
            })?,
        };

        // Ensure listen_address is not empty
        if settings.listen_address.trim().is_empty() {
            settings.listen_address = default_listen_address();
        }

        Ok(settings)
    }

    /// Load settings from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        log::info!("Loading settings from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::load_from_content(&content)
    }

    /// Group names and test parameters used by the assembler
    pub fn group_settings(&self) -> GroupSettings {
        GroupSettings {
            select_group: self.select_group.clone(),
            auto_group: self.auto_group.clone(),
            test_url: self.test_url.clone(),
            test_interval: self.test_interval,
        }
    }

    /// `address:port` to bind the HTTP server to
    pub fn listen_target(&self) -> String {
        if self.listen_address.contains(':') {
            // Already has a port, use as is
            self.listen_address.clone()
        } else {
            format!("{}:{}", self.listen_address, self.listen_port)
        }
    }
}
