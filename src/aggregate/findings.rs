use std::collections::BTreeMap;

use serde_json::Value;

use crate::model::{Finding, RawHit};

/// Fold raw scanner hits into one finding per (template, match-location)
/// pair. Matcher names and extracted values are unioned across collapsed
/// hits, so the reduction is idempotent: feeding it the same hit sequence
/// twice, in any order, yields the same finding set.
pub fn aggregate_findings(hits: &[RawHit]) -> Vec<Finding> {
    let mut merged: BTreeMap<String, Finding> = BTreeMap::new();

    for hit in hits {
        let key = format!("{}|{}", hit.template_id, hit.matched_at);
        let finding = merged.entry(key).or_insert_with(|| Finding {
            template_id: hit.template_id.clone(),
            matched_at: hit.matched_at.clone(),
            severity: hit
                .info
                .get("severity")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            info: hit.info.clone(),
            matchers: Vec::new(),
            extracted_results: Vec::new(),
        });

        if let Some(name) = &hit.matcher_name {
            if !finding.matchers.contains(name) {
                finding.matchers.push(name.clone());
            }
        }
        for value in extracted_values(hit.extracted_results.as_ref()) {
            if !finding.extracted_results.contains(&value) {
                finding.extracted_results.push(value);
            }
        }
    }

    merged.into_values().collect()
}

// The scanner emits extracted results as a list, a scalar, or nothing at
// all depending on the template; normalize all three to a list of strings.
fn extracted_values(raw: Option<&Value>) -> Vec<String> {
    match raw {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(value_to_string).collect(),
        Some(scalar) => vec![value_to_string(scalar)],
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
