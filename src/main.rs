//! company-info - look up a Finnish company in the PRH open data registry
//!
//! Prints the resolved company (name, website, current address, business
//! lines) as JSON on stdout. Logs go to stderr.
//!
//! Exit codes:
//! - 0 success
//! - 1 configuration or output error
//! - 2 invalid business ID
//! - 3 company not found
//! - 4 registry returned data that could not be mapped

use clap::Parser;
use prh_company_info::domain::CompanyInfoError;
use prh_company_info::infra::Config;
use prh_company_info::services::CompanyInfoService;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Look up company information by business ID (y-tunnus)
#[derive(Parser, Debug)]
#[command(name = "company-info", version, about)]
struct Args {
    /// Business ID, e.g. 1234567-8
    business_id: String,

    /// Path to TOML configuration file (falls back to CONFIG_FILE, then config/dev.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Print compact single-line JSON
    #[arg(long)]
    compact: bool,
}

fn exit_code(err: &CompanyInfoError) -> ExitCode {
    match err {
        CompanyInfoError::InvalidBusinessId { .. } => ExitCode::from(2),
        CompanyInfoError::CompanyNotFound { .. } => ExitCode::from(3),
        CompanyInfoError::UnexpectedClientData { .. } => ExitCode::from(4),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging with configurable level via RUST_LOG env var
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = Config::resolve_config_path(args.config.as_deref());
    let config = Config::load_from_path(&config_path);

    info!(
        config_file = %config.config_file(),
        base_url = %config.base_url(),
        timeout_ms = %config.timeout_ms(),
        "config_loaded"
    );

    let service = match CompanyInfoService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "http_client_init_failed");
            return ExitCode::FAILURE;
        }
    };

    let info = match service.get_company_information(&args.business_id).await {
        Ok(info) => info,
        Err(e) => {
            error!(kind = e.kind(), error = %e, "company_lookup_failed");
            eprintln!("{}", e);
            return exit_code(&e);
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&info)
    } else {
        serde_json::to_string_pretty(&info)
    };

    match rendered {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "company_render_failed");
            ExitCode::FAILURE
        }
    }
}
