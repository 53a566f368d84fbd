use serde_json::{Map, Value};

use crate::model::RawHit;

/// Parse vulnerability-scanner output: one JSON record per line, with every
/// top-level key renamed from hyphen to underscore separators so downstream
/// consumers see tool-agnostic field names. Malformed lines are skipped
/// with a warning.
pub fn parse_vuln_lines(stdout: &str) -> Vec<RawHit> {
    let mut hits = Vec::new();
    for (idx, line) in stdout.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(record) => match serde_json::from_value::<RawHit>(normalize_keys(record)) {
                Ok(hit) => hits.push(hit),
                Err(e) => {
                    tracing::warn!("scanner line {} misses required fields: {}", idx + 1, e);
                }
            },
            Err(e) => {
                let excerpt: String = line.chars().take(100).collect();
                tracing::warn!(
                    "skipping malformed scanner line {}: {} ({})",
                    idx + 1,
                    e,
                    excerpt
                );
            }
        }
    }
    hits
}

/// Rename top-level object keys from `kebab-case` to `snake_case`.
pub fn normalize_keys(record: Value) -> Value {
    match record {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.replace('-', "_"), v))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_keys_are_normalized() {
        let line = r#"{"template-id":"tech-detect","matched-at":"https://a.corp.io","matcher-name":"nginx","info":{"severity":"info"}}"#;
        let hits = parse_vuln_lines(line);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].template_id, "tech-detect");
        assert_eq!(hits[0].matched_at, "https://a.corp.io");
        assert_eq!(hits[0].matcher_name.as_deref(), Some("nginx"));
    }

    #[test]
    fn middle_malformed_line_is_skipped() {
        let stdout = concat!(
            r#"{"template-id":"t1","matched-at":"https://a.corp.io"}"#, "\n",
            "not-json\n",
            r#"{"template-id":"t2","matched-at":"https://b.corp.io"}"#, "\n",
        );
        let hits = parse_vuln_lines(stdout);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].template_id, "t1");
        assert_eq!(hits[1].template_id, "t2");
    }

    #[test]
    fn record_without_match_location_is_dropped() {
        let hits = parse_vuln_lines(r#"{"template-id":"t1"}"#);
        assert!(hits.is_empty());
    }
}
