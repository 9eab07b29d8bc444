//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::domain::{
    AppError, DEFAULT_ORGANIZATION, DEFAULT_OUTPUT_FILE, GitHubApiConfig, ReportConfig,
};

#[derive(Parser)]
#[command(name = "codeowners-report")]
#[command(version)]
#[command(
    about = "Export per-file CODEOWNERS ownership for every repository in a GitHub organization",
    long_about = "Reads the access token from GITHUB_TOKEN. Log verbosity follows RUST_LOG."
)]
struct Cli {
    /// GitHub organization to scan
    #[arg(long, env = "CODEOWNERS_ORG", default_value = DEFAULT_ORGANIZATION)]
    org: String,
    /// Output file for the report
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
    /// GitHub REST API base URL
    #[arg(long, default_value = "https://api.github.com")]
    api_url: Url,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl Cli {
    fn into_config(self) -> ReportConfig {
        ReportConfig {
            organization: self.org,
            output_path: self.output,
            github: GitHubApiConfig { api_url: self.api_url, timeout_secs: self.timeout_secs },
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run_report(cli.into_config()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run_report(config: ReportConfig) -> Result<(), AppError> {
    let result = crate::app::api::generate_report(&config)?;

    println!(
        "✅ Wrote {} row(s) for {} repositories to {}",
        result.report.len(),
        result.repositories,
        result.output_path.display()
    );
    Ok(())
}
