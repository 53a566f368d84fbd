use anyhow::Result;

use crate::aggregate::{merge_emails, merge_subdomains};
use crate::config::ScanConfig;
use crate::external::tools;
use crate::model::DiscoveryReport;
use crate::parse::{parse_harvest, parse_host_list, parse_probe_lines, parse_relations};
use crate::parse::emails::extract_emails;
use crate::pipeline::policy::{evaluate_source, SourcePolicy};
use crate::pipeline::progress::ProgressSink;

/// Discovery stage: run every enumeration source to completion
/// (sequentially; a source's failure yields an empty contribution, never a
/// stage abort), merge the entity sets, then probe the merged set for
/// liveness. Always returns a structurally valid, possibly empty, payload.
pub async fn run_discovery(
    domain: &str,
    cfg: &ScanConfig,
    sink: &dyn ProgressSink,
) -> Result<DiscoveryReport> {
    sink.notify(&format!("Enumerating subdomains for {domain}"));

    tracing::info!("running subfinder on {domain}");
    let passive_hosts = match evaluate_source(
        "subfinder",
        SourcePolicy::EMPTY_ON_FAILURE,
        tools::run_subfinder(domain).await,
    )? {
        Some(out) => parse_host_list(&out.stdout),
        None => Vec::new(),
    };
    tracing::info!("subfinder contributed {} hosts", passive_hosts.len());

    tracing::info!("running amass on {domain}");
    let relations = match evaluate_source(
        "amass",
        SourcePolicy::EMPTY_ON_FAILURE,
        tools::run_amass(domain).await,
    )? {
        Some(out) => parse_relations(&out.stdout),
        None => Default::default(),
    };
    tracing::info!(
        "amass contributed {} hosts and {} mx records",
        relations.subdomains.len(),
        relations.mx_records.len()
    );

    sink.notify(&format!("Harvesting emails and hosts for {domain}"));

    // Nonzero exit is routine for the harvester when single data sources
    // rate-limit; partial output is still worth keeping.
    let (harvest_result, sidecar) = match tools::run_theharvester(domain).await {
        Ok(run) => (Ok(run.output), run.sidecar_json),
        Err(e) => (Err(e), None),
    };
    let harvest = match evaluate_source("theHarvester", SourcePolicy::PARTIAL_ON_FAILURE, harvest_result)? {
        Some(out) => parse_harvest(sidecar.as_deref(), &out.stdout),
        None => Default::default(),
    };
    tracing::info!(
        "harvester contributed {} hosts and {} emails",
        harvest.hosts.len(),
        harvest.emails.len()
    );

    let metadata_emails = match tools::run_metadata_pass(domain, cfg).await {
        Ok(Some(result)) => {
            match evaluate_source("exiftool", SourcePolicy::PARTIAL_ON_FAILURE, Ok(result))? {
                Some(out) => extract_emails(&out.stdout),
                None => Vec::new(),
            }
        }
        Ok(None) => Vec::new(),
        Err(e) => {
            evaluate_source("metagoofil", SourcePolicy::PARTIAL_ON_FAILURE, Err(e))?;
            Vec::new()
        }
    };
    tracing::info!("metadata pass contributed {} emails", metadata_emails.len());

    let subdomains = merge_subdomains(
        domain,
        &[passive_hosts, relations.subdomains, harvest.hosts],
    );
    let emails = merge_emails(&[harvest.emails, metadata_emails]);

    sink.notify(&format!("Running liveness probe on {} hosts", subdomains.len()));
    let live_hosts = match evaluate_source(
        "httpx",
        SourcePolicy::EMPTY_ON_FAILURE,
        tools::run_httpx(&subdomains, cfg).await,
    )? {
        Some(out) => parse_probe_lines(&out.stdout),
        None => Vec::new(),
    };
    tracing::info!("probe found {} live hosts", live_hosts.len());

    Ok(DiscoveryReport {
        domain: domain.to_string(),
        subdomains,
        live_hosts,
        mx_records: relations.mx_records,
        emails,
    })
}
