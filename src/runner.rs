use std::path::PathBuf;

use domain_scout::config::ScanConfig;
use domain_scout::model::DiscoveryReport;
use domain_scout::pipeline::{run_discovery, run_vulnerability_scan, ProgressSink};
use domain_scout::utils::{ensure_dir, write_json_pretty};

use crate::cli::{Cli, Commands};

/// Prints progress notifications to the terminal as they arrive.
struct PrintSink;

impl ProgressSink for PrintSink {
    fn notify(&self, message: &str) {
        println!("[*] {message}");
    }
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. External crates stay at warn
    // so tool stderr excerpts remain readable in the terminal.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!("domain_scout={crate_level}");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Scan {
            domain,
            out,
            skip_vulns,
            ports,
            timeout,
            retries,
            rate_limit,
        } => {
            let cfg = build_config(ports, timeout, retries, rate_limit);
            let out_dir = PathBuf::from(&out);
            ensure_dir(&out_dir)?;

            let report = run_discovery(&domain, &cfg, &PrintSink).await?;
            write_json_pretty(&out_dir.join("discovery.json"), &report)?;
            print_discovery_summary(&report);

            if skip_vulns {
                return Ok(());
            }

            let targets: Vec<String> = report.live_hosts.iter().map(|h| h.url.clone()).collect();
            let findings = run_vulnerability_scan(&targets, &cfg, &PrintSink).await?;
            write_json_pretty(&out_dir.join("findings.json"), &findings)?;
            println!("[+] Findings: {}", findings.len());
            println!("[=] Results saved to {}", out_dir.display());
        }
        Commands::Discover {
            domain,
            out,
            ports,
            timeout,
            retries,
        } => {
            let cfg = build_config(ports, timeout, retries, None);
            let out_dir = PathBuf::from(&out);
            ensure_dir(&out_dir)?;

            let report = run_discovery(&domain, &cfg, &PrintSink).await?;
            write_json_pretty(&out_dir.join("discovery.json"), &report)?;
            print_discovery_summary(&report);
            println!("[=] Results saved to {}", out_dir.display());
        }
        Commands::Vulns {
            targets,
            out,
            rate_limit,
        } => {
            let cfg = build_config(None, None, None, rate_limit);
            let out_dir = PathBuf::from(&out);
            ensure_dir(&out_dir)?;

            let data = std::fs::read_to_string(&targets)?;
            let target_urls: Vec<String> = data
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();

            let findings = run_vulnerability_scan(&target_urls, &cfg, &PrintSink).await?;
            write_json_pretty(&out_dir.join("findings.json"), &findings)?;
            println!("[+] Findings: {}", findings.len());
            println!("[=] Results saved to {}", out_dir.display());
        }
    }
    Ok(())
}

fn build_config(
    ports: Option<String>,
    timeout: Option<u64>,
    retries: Option<u8>,
    rate_limit: Option<u16>,
) -> ScanConfig {
    let mut cfg = ScanConfig::default();
    if let Some(ports) = ports {
        cfg.probe_ports = ports;
    }
    if let Some(timeout) = timeout {
        cfg.probe_timeout_secs = timeout;
    }
    if let Some(retries) = retries {
        cfg.probe_retries = retries;
    }
    if let Some(rate_limit) = rate_limit {
        cfg.scan_rate_limit = rate_limit;
    }
    cfg
}

fn print_discovery_summary(report: &DiscoveryReport) {
    println!("[+] Subdomains: {}", report.subdomains.len());
    println!("[+] Live hosts: {}", report.live_hosts.len());
    println!("[+] MX records: {}", report.mx_records.len());
    println!("[+] Emails: {}", report.emails.len());
}
