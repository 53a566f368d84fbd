use serde::Deserialize;

use crate::parse::emails::extract_emails;

#[derive(Debug, Deserialize)]
struct Sidecar {
    #[serde(default)]
    emails: Vec<String>,
    #[serde(default)]
    hosts: Vec<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct HarvestOutput {
    pub hosts: Vec<String>,
    pub emails: Vec<String>,
}

/// Parse harvesting-tool output. The structured sidecar is preferred when
/// present; otherwise raw stdout is scanned for email-shaped substrings.
/// Host entries may carry a resolved-address suffix (`host:ip`) which is
/// stripped.
pub fn parse_harvest(sidecar_json: Option<&str>, stdout: &str) -> HarvestOutput {
    if let Some(raw) = sidecar_json {
        match serde_json::from_str::<Sidecar>(raw) {
            Ok(sidecar) => {
                return HarvestOutput {
                    hosts: sidecar
                        .hosts
                        .iter()
                        .map(|h| h.split(':').next().unwrap_or(h).trim().to_string())
                        .filter(|h| !h.is_empty())
                        .collect(),
                    emails: sidecar.emails,
                };
            }
            Err(e) => {
                tracing::warn!("unreadable harvest sidecar, falling back to stdout scan: {e}");
            }
        }
    }
    HarvestOutput {
        hosts: Vec::new(),
        emails: extract_emails(stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_sidecar_and_strips_host_suffixes() {
        let sidecar = r#"{"emails":["ops@corp.io"],"hosts":["www.corp.io:93.184.216.34","api.corp.io"]}"#;
        let out = parse_harvest(Some(sidecar), "ignored@stdout.io");
        assert_eq!(out.hosts, vec!["www.corp.io", "api.corp.io"]);
        assert_eq!(out.emails, vec!["ops@corp.io"]);
    }

    #[test]
    fn falls_back_to_stdout_scan_without_sidecar() {
        let out = parse_harvest(None, "[*] found ops@corp.io during search\n");
        assert!(out.hosts.is_empty());
        assert_eq!(out.emails, vec!["ops@corp.io"]);
    }

    #[test]
    fn broken_sidecar_falls_back_to_stdout() {
        let out = parse_harvest(Some("{not json"), "ops@corp.io");
        assert_eq!(out.emails, vec!["ops@corp.io"]);
    }
}
