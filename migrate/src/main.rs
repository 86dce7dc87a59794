//! Calculates the USDX minting rewards missed in the kava-7 export so they can be included in the
//! migration to kava-8. Run from the migration folder to write `rewards.rs`.

use std::{env, process::ExitCode};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use usdx_rewards::{config::Config, run};

fn main() -> ExitCode {
    init_tracing();

    let config = Config::default();
    info!(
        cdps = %config.cdps_path.display(),
        indexes = %config.indexes_path.display(),
        claims = %config.claims_path.display(),
        height = config.export_height,
        "Computing missed USDX minting rewards"
    );

    match run(&config) {
        Ok(rewards) => {
            info!(output = %config.output_path.display(), owners = rewards.len(), "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

// USDX_REWARDS_LOG takes precedence over RUST_LOG
fn init_tracing() {
    let filter = env::var("USDX_REWARDS_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();
}
