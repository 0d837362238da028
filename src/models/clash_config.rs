use serde::Serialize;

use super::{ProxyDescriptor, ProxyGroupConfigs};

/// The assembled Clash document
///
/// Every section is always written, even when empty, so a client loading a
/// conversion of an empty subscription still sees a well-formed config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashConfig {
    pub proxies: Vec<ProxyDescriptor>,
    pub proxy_groups: ProxyGroupConfigs,
    pub rules: Vec<String>,
}

impl ClashConfig {
    pub fn proxy_names(&self) -> impl Iterator<Item = &str> {
        self.proxies.iter().map(ProxyDescriptor::name)
    }

    pub fn group(&self, name: &str) -> Option<&super::ProxyGroupConfig> {
        self.proxy_groups.iter().find(|g| g.name == name)
    }
}
