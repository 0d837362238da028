use thiserror::Error;

use crate::models::ProxyType;

/// Why a single link could not be turned into a proxy
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("missing '{0}' separator")]
    MissingSeparator(char),

    #[error("{proxy_type} link missing required field '{field}'")]
    MissingField {
        proxy_type: ProxyType,
        field: &'static str,
    },

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
}

impl ParseError {
    pub(crate) fn missing(proxy_type: ProxyType, field: &'static str) -> Self {
        ParseError::MissingField { proxy_type, field }
    }
}

/// Errors raised outside the link parser: rendering, I/O and settings
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("built without the '{0}' feature")]
    FeatureDisabled(&'static str),
}
