//! Argument builders for every external tool the pipeline drives. Each
//! invocation is configuration (argument list plus input mode) over the one
//! uniform runner in `process`; no tool gets its own execution code path.

use anyhow::Result;

use crate::config::ScanConfig;
use crate::external::locate::{locate_tool, template_args};
use crate::external::process::{
    run_tool, unique_temp_path, TempDir, TempPath, ToolInput, ToolOutput,
};

fn to_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// Passive subdomain enumeration, one hostname per stdout line.
pub async fn run_subfinder(domain: &str) -> Result<ToolOutput> {
    let args = to_args(&["-d", domain, "-all", "-recursive", "-silent"]);
    run_tool(&locate_tool("subfinder"), &args, ToolInput::None).await
}

/// Active enumeration; stdout mixes plain hostnames with relation lines.
pub async fn run_amass(domain: &str) -> Result<ToolOutput> {
    let args = to_args(&["enum", "-d", domain]);
    run_tool(&locate_tool("amass"), &args, ToolInput::None).await
}

pub struct HarvesterRun {
    pub output: ToolOutput,
    /// Raw contents of the JSON sidecar the tool wrote next to its `-f`
    /// path, when it produced one.
    pub sidecar_json: Option<String>,
}

/// OSINT harvesting. The tool writes `<base>.json` and `<base>.xml` result
/// files; both are removed after the JSON one has been read.
pub async fn run_theharvester(domain: &str) -> Result<HarvesterRun> {
    let base = unique_temp_path("scout-harvest", "out");
    let json_guard = TempPath::reserve(base.with_extension("out.json"));
    let _xml_guard = TempPath::reserve(base.with_extension("out.xml"));

    let base_str = base.display().to_string();
    let args = to_args(&["-d", domain, "-b", "all", "-f", &base_str]);
    let output = run_tool(&locate_tool("theHarvester"), &args, ToolInput::None).await?;

    let sidecar_json = std::fs::read_to_string(json_guard.path()).ok();
    Ok(HarvesterRun {
        output,
        sidecar_json,
    })
}

/// Document metadata pass: download candidate documents, then extract
/// metadata from whatever arrived. Returns `None` when no documents were
/// retrieved, in which case extraction is skipped entirely. The download
/// directory is removed on every exit path.
pub async fn run_metadata_pass(domain: &str, cfg: &ScanConfig) -> Result<Option<ToolOutput>> {
    let downloads = TempDir::create("scout-docs")?;
    let dir_str = downloads.path().display().to_string();

    let search_limit = cfg.doc_search_limit.to_string();
    let download_limit = cfg.doc_download_limit.to_string();
    let dl_args = to_args(&[
        "-d",
        domain,
        "-t",
        &cfg.doc_types,
        "-l",
        &search_limit,
        "-n",
        &download_limit,
        "-o",
        &dir_str,
        "-w",
    ]);
    let dl = run_tool(&locate_tool("metagoofil"), &dl_args, ToolInput::None).await?;
    if !dl.success() {
        tracing::warn!(
            "metagoofil exited with {}, checking for partial downloads",
            dl.exit_code
        );
    }

    if !downloads.has_entries() {
        tracing::info!("no documents retrieved for {}", domain);
        return Ok(None);
    }

    let ex_args = to_args(&["-r", &dir_str]);
    let extracted = run_tool(&locate_tool("exiftool"), &ex_args, ToolInput::None).await?;
    Ok(Some(extracted))
}

/// Liveness probe over a host list supplied on stdin, JSON lines out.
pub async fn run_httpx(hosts: &[String], cfg: &ScanConfig) -> Result<ToolOutput> {
    let timeout = cfg.probe_timeout_secs.to_string();
    let retries = cfg.probe_retries.to_string();
    let args = to_args(&[
        "-ports",
        &cfg.probe_ports,
        "-tech-detect",
        "-title",
        "-status-code",
        "-follow-redirects",
        "-json",
        "-silent",
        "-timeout",
        &timeout,
        "-retries",
        &retries,
    ]);
    run_tool(
        &locate_tool("httpx"),
        &args,
        ToolInput::Stdin(hosts.join("\n")),
    )
    .await
}

/// Template-based vulnerability scan over a target list supplied as a
/// generated temp file, JSON lines out, rate-limited, all severities.
pub async fn run_nuclei(targets: &[String], cfg: &ScanConfig) -> Result<ToolOutput> {
    let list = TempPath::with_lines("scout-targets", targets)?;
    let list_str = list.path().display().to_string();
    let rate = cfg.scan_rate_limit.to_string();

    let mut args = template_args();
    args.extend(to_args(&[
        "-l",
        &list_str,
        "-rl",
        &rate,
        "-severity",
        &cfg.scan_severities,
        "-j",
        "-silent",
        "-nc",
    ]));
    run_tool(&locate_tool("nuclei"), &args, ToolInput::None).await
}
