use domain_scout::aggregate::{aggregate_findings, merge_emails, merge_subdomains};
use domain_scout::model::RawHit;
use domain_scout::parse::parse_vuln_lines;
use serde_json::json;

fn hit(template_id: &str, matched_at: &str, matcher: Option<&str>, extracted: serde_json::Value) -> RawHit {
    serde_json::from_value(json!({
        "template_id": template_id,
        "matched_at": matched_at,
        "matcher_name": matcher,
        "extracted_results": extracted,
        "info": {"severity": "medium", "name": "Test Template"},
    }))
    .unwrap()
}

#[test]
fn hits_sharing_template_and_location_collapse_to_one_finding() {
    let hits = vec![
        hit("exposed-panel", "https://a.corp.io/admin", Some("http-title"), json!(null)),
        hit("exposed-panel", "https://a.corp.io/admin", Some("body-word"), json!(null)),
    ];
    let findings = aggregate_findings(&hits);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].matchers, vec!["http-title", "body-word"]);
    assert_eq!(findings[0].severity, "medium");
}

#[test]
fn distinct_locations_stay_separate() {
    let hits = vec![
        hit("exposed-panel", "https://a.corp.io/admin", None, json!(null)),
        hit("exposed-panel", "https://b.corp.io/admin", None, json!(null)),
    ];
    assert_eq!(aggregate_findings(&hits).len(), 2);
}

#[test]
fn extracted_results_union_scalar_and_list() {
    let hits = vec![
        hit("version-detect", "https://a.corp.io", None, json!(["1.2.3", "1.2.4"])),
        hit("version-detect", "https://a.corp.io", None, json!("1.2.3")),
        hit("version-detect", "https://a.corp.io", None, json!("2.0.0")),
    ];
    let findings = aggregate_findings(&hits);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].extracted_results, vec!["1.2.3", "1.2.4", "2.0.0"]);
}

#[test]
fn aggregation_is_idempotent_and_order_insensitive() {
    let mut hits = vec![
        hit("t1", "https://a.corp.io", Some("m1"), json!(["x"])),
        hit("t1", "https://a.corp.io", Some("m2"), json!(["y"])),
        hit("t2", "https://b.corp.io", None, json!(null)),
    ];
    let first = aggregate_findings(&hits);
    let second = aggregate_findings(&hits);
    assert_eq!(first, second);

    hits.reverse();
    let reversed = aggregate_findings(&hits);
    assert_eq!(first.len(), reversed.len());
    for finding in &reversed {
        let twin = first
            .iter()
            .find(|f| f.template_id == finding.template_id && f.matched_at == finding.matched_at)
            .unwrap();
        let mut a = finding.matchers.clone();
        let mut b = twin.matchers.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}

#[test]
fn severity_defaults_to_unknown_without_info() {
    let hits = parse_vuln_lines(r#"{"template-id":"t1","matched-at":"https://a.corp.io"}"#);
    let findings = aggregate_findings(&hits);
    assert_eq!(findings[0].severity, "unknown");
}

#[test]
fn merged_set_always_contains_the_root_domain() {
    let merged = merge_subdomains(
        "example.com",
        &[
            vec!["www.example.com".to_string()],
            vec![],
            vec!["api.example.com".to_string()],
        ],
    );
    assert_eq!(merged, vec!["api.example.com", "example.com", "www.example.com"]);

    let empty_sources = merge_subdomains("example.com", &[]);
    assert_eq!(empty_sources, vec!["example.com"]);
}

#[test]
fn subdomain_merge_deduplicates_across_sources() {
    let merged = merge_subdomains(
        "corp.io",
        &[
            vec!["www.corp.io".to_string(), "api.corp.io".to_string()],
            vec!["www.corp.io".to_string()],
        ],
    );
    assert_eq!(merged, vec!["api.corp.io", "corp.io", "www.corp.io"]);
}

#[test]
fn email_merge_filters_placeholders_once_for_all_sources() {
    let merged = merge_emails(&[
        vec![
            "ops@corp.io".to_string(),
            "cmartorella@edge-security.com".to_string(),
        ],
        vec!["Ops@corp.io".to_string(), "test@example.com".to_string()],
    ]);
    assert_eq!(merged, vec!["ops@corp.io"]);
}
