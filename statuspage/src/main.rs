//! Static status page generator entry point

use anyhow::{Context, Result};
use clap::Parser;
use statuspage::cli::Cli;
use statuspage::config::CycleConfig;
use statuspage::logging::{self, LogOptions};
use statuspage::{CycleError, CycleReport, StatusCycle};
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();

    // subscriberはプロセスの生存期間だけ有効（グローバル登録はしない）
    let dispatch = logging::build(LogOptions::from(&cli));
    let _guard = tracing::dispatcher::set_default(&dispatch);
    debug!("Logging initialized");

    match try_main(&cli) {
        Ok(report) => {
            info!(
                status = %report.status,
                healthy = report.healthy_count,
                total = report.total_count,
                path = %report.output_path.display(),
                "Status page updated"
            );
        }
        Err(e) => {
            let stage = e
                .downcast_ref::<CycleError>()
                .map(|cycle_error| cycle_error.stage().as_str())
                .unwrap_or("startup");
            error!(stage, error = %e, "Failed to render status page");
            std::process::exit(1);
        }
    }
}

fn try_main(cli: &Cli) -> Result<CycleReport> {
    let config = CycleConfig::from_cli(cli).map_err(CycleError::from)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    let report = runtime.block_on(run_cycle(config))?;
    Ok(report)
}

async fn run_cycle(config: CycleConfig) -> Result<CycleReport, CycleError> {
    let cycle = StatusCycle::new(config)?;
    cycle.run().await
}
