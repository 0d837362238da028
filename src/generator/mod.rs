pub mod config;
pub mod yaml;

// Re-export common types
pub use config::group::{assemble, assemble_with, GroupSettings};
pub use yaml::clash::{render, render_json, render_yaml, OutputFormat};
