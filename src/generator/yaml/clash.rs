use std::str::FromStr;

use crate::error::ConvertError;
use crate::models::ClashConfig;

/// Text format of the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" | "clash" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl OutputFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "text/yaml; charset=utf-8",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Render a config as Clash YAML
pub fn render_yaml(config: &ClashConfig) -> Result<String, ConvertError> {
    Ok(serde_yaml::to_string(config)?)
}

/// Render a config as pretty-printed JSON
pub fn render_json(config: &ClashConfig) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(config)?)
}

pub fn render(config: &ClashConfig, format: OutputFormat) -> Result<String, ConvertError> {
    match format {
        OutputFormat::Yaml => render_yaml(config),
        OutputFormat::Json => render_json(config),
    }
}
