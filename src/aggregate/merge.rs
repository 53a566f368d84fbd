use std::collections::BTreeSet;

use crate::parse::emails::is_denylisted;

/// Union all enumeration sources' subdomain lists, deduplicated and sorted.
/// The target domain itself is guaranteed present so the probe set always
/// covers the apex even when no source reported it.
pub fn merge_subdomains(domain: &str, sources: &[Vec<String>]) -> Vec<String> {
    let mut set: BTreeSet<String> = BTreeSet::new();
    for source in sources {
        for host in source {
            let host = host.trim();
            if !host.is_empty() {
                set.insert(host.to_string());
            }
        }
    }
    set.insert(domain.to_string());
    set.into_iter().collect()
}

/// Union email sets with the denylist filter applied once, independent of
/// which source produced an address.
pub fn merge_emails(sources: &[Vec<String>]) -> Vec<String> {
    let mut set: BTreeSet<String> = BTreeSet::new();
    for source in sources {
        for address in source {
            let address = address.trim().to_lowercase();
            if !address.is_empty() && !is_denylisted(&address) {
                set.insert(address);
            }
        }
    }
    set.into_iter().collect()
}
