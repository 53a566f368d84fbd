use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::MxRecord;

/// `SOURCE (FQDN) --> relation --> TARGET (FQDN)` relation lines, with the
/// node kind annotations kept loose since non-FQDN nodes occur too.
static RELATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<src>\S+) \([^)]+\) --> (?P<rel>\S+) --> (?P<dst>\S+) \([^)]+\)$")
        .expect("relation regex is valid")
});

#[derive(Debug, Default, PartialEq)]
pub struct RelationOutput {
    pub subdomains: Vec<String>,
    pub mx_records: Vec<MxRecord>,
}

/// Parse active-enumeration output. Each line is either a plain hostname or
/// a relation. Only `mx_record` relations contribute anything (the record
/// plus the source host); every other relation kind is dropped on both
/// sides so non-host entities never pollute the subdomain set.
pub fn parse_relations(stdout: &str) -> RelationOutput {
    let mut out = RelationOutput::default();
    for line in stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match RELATION_RE.captures(line) {
            Some(caps) => {
                if &caps["rel"] == "mx_record" {
                    out.subdomains.push(caps["src"].to_string());
                    out.mx_records.push(MxRecord {
                        source_domain: caps["src"].to_string(),
                        mx_server: caps["dst"].to_string(),
                    });
                }
                // ns_record, ptr_record and friends carry no host for us
            }
            // The plain-hostname fallback is only for lines with no relation
            // arrow at all; an arrow that fails the grammar is a malformed
            // relation, not a host.
            None if line.contains(" --> ") => {
                tracing::warn!("skipping malformed relation line: {line}");
            }
            None => out.subdomains.push(line.to_string()),
        }
    }
    out
}
