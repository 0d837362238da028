//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use sub2clash::models::{ProxyDescriptor, ProxyType};
//! use sub2clash::parser::parse_links;
//!
//! let proxies = parse_links("trojan://secret@example.com:443#node");
//! assert_eq!(proxies[0].proxy_type(), ProxyType::Trojan);
//! assert_eq!(proxies[0].name(), "node");
//! ```
//!
//! # Working with Option fields
//!
//! Fields a link may leave out are wrapped in `Option` and are omitted from the
//! rendered document when `None`:
//!
//! ```rust
//! use sub2clash::models::ProxyDescriptor;
//! use sub2clash::parser::parse_links;
//!
//! let proxies = parse_links("vless://id@example.com:443?security=tls#n");
//! let ProxyDescriptor::Vless(vless) = &proxies[0] else {
//!     panic!("expected a vless proxy");
//! };
//! assert!(vless.reality_opts.is_none());
//! let flow = vless.flow.as_deref().unwrap_or("none");
//! assert_eq!(flow, "none");
//! ```

mod clash_config;
mod proxy;
pub mod proxy_group_config;

pub use clash_config::ClashConfig;
pub use proxy::*;
pub use proxy_group_config::{ProxyGroupConfig, ProxyGroupConfigs, ProxyGroupType};
