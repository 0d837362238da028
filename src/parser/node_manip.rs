use std::collections::{HashMap, HashSet};

use crate::models::ProxyDescriptor;

/// Makes proxy names unique within one conversion
///
/// The first node with a given name keeps it; the Nth one becomes
/// `<name>_<N>`. Counting follows the order nodes are fed in. If a generated
/// name is already taken (a link literally named `a_2`, say) the counter
/// keeps advancing until the name is free.
#[derive(Debug, Default)]
pub struct NameDeduplicator {
    counts: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl NameDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename `node` if its name has been seen before
    pub fn assign(&mut self, node: &mut ProxyDescriptor) {
        let base = node.name().to_string();
        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;

        let mut name = base.clone();
        if *count > 1 || self.taken.contains(&name) {
            *count = (*count).max(2);
            name = format!("{}_{}", base, count);
            while self.taken.contains(&name) {
                *count += 1;
                name = format!("{}_{}", base, count);
            }
            node.set_name(name.clone());
        }
        self.taken.insert(name);
    }
}

/// Deduplicate the names of an already collected node list in place
pub fn dedupe_names(nodes: &mut [ProxyDescriptor]) {
    let mut dedup = NameDeduplicator::new();
    for node in nodes.iter_mut() {
        dedup.assign(node);
    }
}
