//! CLI module for statuspage
//!
//! Provides the command-line interface. Every option can also be supplied
//! through an environment variable so the tool can run unattended from cron.

use crate::config::{DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_NAME, DEFAULT_TEMPLATES_DIR, DEFAULT_URLS};
use crate::health::poller::DEFAULT_POLL_TIMEOUT_SECS;
use clap::Parser;
use std::path::PathBuf;

/// Static status page generator - polls a set of sites once and renders an HTML summary
#[derive(Parser, Debug)]
#[command(name = "statuspage")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    STATUSPAGE_URLS           Comma separated URLs to monitor
    STATUSPAGE_TIMEOUT_SECS   Per-poll timeout in seconds (default: 30)
    STATUSPAGE_TEMPLATES      Directory containing templates
    STATUSPAGE_OUTPUT_DIR     Directory in which to write output
    RUST_LOG                  Log filter (overrides --debug)
"#)]
pub struct Cli {
    /// URL to monitor (repeatable)
    #[arg(
        short = 'u',
        long = "url",
        env = "STATUSPAGE_URLS",
        value_delimiter = ',',
        default_values_t = default_urls()
    )]
    pub urls: Vec<String>,

    /// Per-poll timeout in seconds
    #[arg(long, default_value_t = DEFAULT_POLL_TIMEOUT_SECS, env = "STATUSPAGE_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Directory containing templates
    #[arg(short = 't', long, default_value = DEFAULT_TEMPLATES_DIR, env = "STATUSPAGE_TEMPLATES")]
    pub templates: PathBuf,

    /// Template file name inside the template directory
    #[arg(long, default_value = DEFAULT_PAGE_NAME)]
    pub template_name: String,

    /// Directory in which to write output
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR, env = "STATUSPAGE_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Output file name inside the output directory
    #[arg(long, default_value = DEFAULT_PAGE_NAME)]
    pub output_name: String,

    /// Enable debugging output
    #[arg(short = 'D', long, default_value_t = false)]
    pub debug: bool,

    /// Enable timestamps in log output
    #[arg(short = 'T', long, default_value_t = false)]
    pub timestamp: bool,
}

fn default_urls() -> Vec<String> {
    DEFAULT_URLS.iter().map(|url| url.to_string()).collect()
}
