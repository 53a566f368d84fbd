use serde_json::Value;

use crate::model::LiveHost;

/// Parse liveness-probe output: one JSON record per line. Malformed lines
/// are skipped with a warning and never abort the batch.
pub fn parse_probe_lines(stdout: &str) -> Vec<LiveHost> {
    let mut hosts = Vec::new();
    for (idx, line) in stdout.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(record) => match live_host_from_record(&record) {
                Some(host) => hosts.push(host),
                None => tracing::warn!("probe line {} has no url field, skipping", idx + 1),
            },
            Err(e) => {
                tracing::warn!("skipping malformed probe line {}: {}", idx + 1, e);
            }
        }
    }
    hosts
}

fn live_host_from_record(record: &Value) -> Option<LiveHost> {
    let url = str_field(record, "url")?;

    // Backfill the address from the DNS-answer list when the probe did not
    // report a direct ip; explicit None means neither field was present.
    let ip = str_field(record, "ip").or_else(|| {
        record
            .get("a")
            .and_then(Value::as_array)
            .and_then(|answers| answers.first())
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    Some(LiveHost {
        url,
        status_code: u16_field(record, "status_code").or_else(|| u16_field(record, "status-code")),
        title: str_field(record, "title"),
        webserver: str_field(record, "webserver"),
        tech: record
            .get("tech")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        host: str_field(record, "host"),
        ip,
        port: u16_field(record, "port"),
    })
}

fn str_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

// The probe emits some numerics as strings depending on version; accept both.
fn u16_field(record: &Value, key: &str) -> Option<u16> {
    match record.get(key)? {
        Value::Number(n) => n.as_u64().and_then(|v| u16::try_from(v).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
