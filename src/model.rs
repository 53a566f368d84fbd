use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One MX relation surfaced by the active enumeration tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    pub source_domain: String,
    pub mx_server: String,
}

/// One responsive endpoint reported by the liveness probe.
///
/// `ip` stays `None` only when the probe reported no address field of any
/// kind; it serializes as an explicit `null` so consumers can tell "no
/// record" apart from a missing column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveHost {
    pub url: String,
    pub status_code: Option<u16>,
    pub title: Option<String>,
    pub webserver: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    pub host: Option<String>,
    pub ip: Option<String>,
    pub port: Option<u16>,
}

/// One unaggregated vulnerability-scanner output line, after key
/// normalization (hyphens converted to underscores).
#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    pub template_id: String,
    pub matched_at: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub matcher_name: Option<String>,
    #[serde(default)]
    pub extracted_results: Option<Value>,
    #[serde(default)]
    pub info: Value,
}

/// One deduplicated vulnerability result, keyed by template and match
/// location. `matchers` and `extracted_results` are set unions over all
/// raw hits that collapsed into this finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub template_id: String,
    pub matched_at: String,
    pub severity: String,
    pub info: Value,
    pub matchers: Vec<String>,
    pub extracted_results: Vec<String>,
}

/// Payload returned by the discovery stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryReport {
    pub domain: String,
    pub subdomains: Vec<String>,
    pub live_hosts: Vec<LiveHost>,
    pub mx_records: Vec<MxRecord>,
    pub emails: Vec<String>,
}
