use clap::Parser;
use std::path::PathBuf;

use grant_report::application::dto::OutputFormat;

/// Render Grant license-compliance reports as reviewable Markdown
#[derive(Parser, Debug)]
#[command(name = "grant-report")]
#[command(version)]
#[command(
    about = "Render Grant license-compliance JSON reports as reviewable Markdown",
    long_about = None
)]
pub struct Args {
    /// Grant JSON report (`grant check <sbom> -o json`); "-" or omitted reads stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write report.md (or report.json) inside this directory
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format: markdown (default) or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Exit with code 1 when the report lists denied packages
    #[arg(long)]
    pub fail_on_denied: bool,

    /// Exit with code 1 when the report lists unlicensed packages
    #[arg(long)]
    pub fail_on_unlicensed: bool,

    /// Path to a config file (defaults to ./grant-report.config.yml when present)
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Do not auto-discover a config file
    #[arg(long)]
    pub no_config: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
