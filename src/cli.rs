use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable detailed debug logging (global)
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging (global)
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Full chain: enumerate, probe, then scan the live set for vulnerabilities
    Scan {
        /// Target domain (e.g. example.com)
        domain: String,

        /// Output directory
        #[arg(short = 'o', long, default_value = "./results")]
        out: String,

        /// Skip the vulnerability stage
        #[arg(long, default_value_t = false)]
        skip_vulns: bool,

        /// Probe ports
        #[arg(long)]
        ports: Option<String>,

        /// Probe per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Probe retries
        #[arg(short = 'r', long)]
        retries: Option<u8>,

        /// Requests per second for the vulnerability scanner
        #[arg(long)]
        rate_limit: Option<u16>,
    },

    /// Discovery only: enumerate subdomains and probe for live hosts
    Discover {
        /// Target domain (e.g. example.com)
        domain: String,

        /// Output directory
        #[arg(short = 'o', long, default_value = "./results")]
        out: String,

        /// Probe ports
        #[arg(long)]
        ports: Option<String>,

        /// Probe per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Probe retries
        #[arg(short = 'r', long)]
        retries: Option<u8>,
    },

    /// Vulnerability scan over an explicit target list
    Vulns {
        /// Path to a newline-delimited file of target URLs
        targets: String,

        /// Output directory
        #[arg(short = 'o', long, default_value = "./results")]
        out: String,

        /// Requests per second for the vulnerability scanner
        #[arg(long)]
        rate_limit: Option<u16>,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
