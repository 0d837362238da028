//! Group generation utilities
//!
//! Builds the two proxy groups and the catch-all rule that wrap a node list.

use crate::models::{ClashConfig, ProxyDescriptor, ProxyGroupConfig, ProxyGroupType};

pub const SELECT_GROUP_NAME: &str = "Select";
pub const AUTO_GROUP_NAME: &str = "Auto";
pub const DEFAULT_TEST_URL: &str = "http://www.gstatic.com/generate_204";
pub const DEFAULT_TEST_INTERVAL: u32 = 300;
pub const DIRECT_POLICY: &str = "DIRECT";
pub const REJECT_POLICY: &str = "REJECT";

/// Names and latency-test parameters of the generated groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSettings {
    pub select_group: String,
    pub auto_group: String,
    pub test_url: String,
    pub test_interval: u32,
}

impl Default for GroupSettings {
    fn default() -> Self {
        Self {
            select_group: SELECT_GROUP_NAME.to_string(),
            auto_group: AUTO_GROUP_NAME.to_string(),
            test_url: DEFAULT_TEST_URL.to_string(),
            test_interval: DEFAULT_TEST_INTERVAL,
        }
    }
}

/// Wrap a node list into a Clash config with the default groups
pub fn assemble(nodes: Vec<ProxyDescriptor>) -> ClashConfig {
    assemble_with(nodes, &GroupSettings::default())
}

/// Wrap a node list into a Clash config
///
/// # Arguments
///
/// * `nodes` - Uniquely named nodes, in output order
/// * `settings` - Group names and test parameters
///
/// # Returns
///
/// A config with a manual `select` group (all nodes, then `DIRECT` and
/// `REJECT`), a `url-test` group over all nodes, and a single `MATCH` rule
/// pointing at the select group.
pub fn assemble_with(nodes: Vec<ProxyDescriptor>, settings: &GroupSettings) -> ClashConfig {
    let names: Vec<String> = nodes.iter().map(|n| n.name().to_string()).collect();

    let mut select = ProxyGroupConfig::new(settings.select_group.clone(), ProxyGroupType::Select);
    select.proxies = names.clone();
    select.proxies.push(DIRECT_POLICY.to_string());
    select.proxies.push(REJECT_POLICY.to_string());

    let mut auto = ProxyGroupConfig::new(settings.auto_group.clone(), ProxyGroupType::URLTest);
    auto.url = Some(settings.test_url.clone());
    auto.interval = Some(settings.test_interval);
    auto.proxies = names;

    ClashConfig {
        proxies: nodes,
        proxy_groups: vec![select, auto],
        rules: vec![format!("MATCH,{}", settings.select_group)],
    }
}
