//! Convert proxy share links (vmess, vless, trojan, ss, tuic, hysteria2) into
//! a Clash configuration.
//!
//! ```rust
//! let yaml = sub2clash::convert("trojan://secret@example.com:443#node").unwrap();
//! assert!(yaml.contains("MATCH,Select"));
//! ```

pub mod api;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;
#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the main types for easier access
pub use error::{ConvertError, ParseError};
pub use generator::{assemble, assemble_with, render, GroupSettings, OutputFormat};
pub use models::{ClashConfig, ProxyDescriptor, ProxyType};
pub use parser::{parse_links, parse_links_with};
pub use settings::Settings;

/// Convert a block of share links into Clash YAML with the default groups
pub fn convert(text: &str) -> Result<String, ConvertError> {
    convert_with(text, &GroupSettings::default(), OutputFormat::Yaml)
}

/// Run the whole pipeline: parse, deduplicate, assemble, render
pub fn convert_with(
    text: &str,
    groups: &GroupSettings,
    format: OutputFormat,
) -> Result<String, ConvertError> {
    let nodes = parse_links(text);
    let config = assemble_with(nodes, groups);
    render(&config, format)
}
