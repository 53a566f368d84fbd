use anyhow::Result;

use crate::aggregate::aggregate_findings;
use crate::config::ScanConfig;
use crate::external::tools;
use crate::model::Finding;
use crate::parse::parse_vuln_lines;
use crate::pipeline::policy::{evaluate_source, SourcePolicy};
use crate::pipeline::progress::ProgressSink;

/// Vulnerability stage: run the template scanner once over a caller-supplied
/// target list (normally the live hosts' URLs from a prior discovery), then
/// reduce raw hits to findings. An empty target list short-circuits to an
/// empty finding set.
pub async fn run_vulnerability_scan(
    targets: &[String],
    cfg: &ScanConfig,
    sink: &dyn ProgressSink,
) -> Result<Vec<Finding>> {
    if targets.is_empty() {
        tracing::info!("no targets supplied, skipping vulnerability scan");
        return Ok(Vec::new());
    }

    sink.notify(&format!("Running template scan on {} targets", targets.len()));
    let hits = match evaluate_source(
        "nuclei",
        SourcePolicy::PARTIAL_ON_FAILURE,
        tools::run_nuclei(targets, cfg).await,
    )? {
        Some(out) => parse_vuln_lines(&out.stdout),
        None => Vec::new(),
    };
    tracing::info!("scanner produced {} raw hits", hits.len());

    sink.notify(&format!("Aggregating {} raw hits", hits.len()));
    Ok(aggregate_findings(&hits))
}
