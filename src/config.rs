use serde::Deserialize;

/// Knobs for the external tool invocations. Everything tool-specific that
/// is tunable lives here; the argument builders in `external::tools` read
/// from this instead of hardcoding values.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Ports handed to the liveness probe.
    pub probe_ports: String,
    /// Per-request timeout for the liveness probe, in seconds.
    pub probe_timeout_secs: u64,
    /// Retry count for the liveness probe.
    pub probe_retries: u8,
    /// Requests per second passed to the vulnerability scanner.
    pub scan_rate_limit: u16,
    /// Severity filter for the vulnerability scanner.
    pub scan_severities: String,
    /// Document types harvested by the metadata pass.
    pub doc_types: String,
    /// Search-result cap for the metadata pass.
    pub doc_search_limit: u16,
    /// Download cap for the metadata pass.
    pub doc_download_limit: u16,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            probe_ports: "80,443,8080,8443".to_string(),
            probe_timeout_secs: 10,
            probe_retries: 2,
            scan_rate_limit: 50,
            scan_severities: "critical,high,medium,low,info,unknown".to_string(),
            doc_types: "pdf,doc,docx,xls,xlsx,ppt,pptx".to_string(),
            doc_search_limit: 100,
            doc_download_limit: 10,
        }
    }
}
