pub mod config;
pub mod emitter;
pub mod error;
pub mod loader;

use tracing::info;
use usdx_rewards_calculator::calculate;
use usdx_rewards_types::rewards::{count_entries, totals_by_collateral_type, ComputedRewards};

use crate::{
    config::Config,
    emitter::{create_output_string, write_output},
    error::MigrateResult,
    loader::{load_cdps, load_claims, load_global_indexes},
};

/// Loads the snapshots, computes the missed rewards and writes the generated file. Nothing is
/// written unless every snapshot loads and every owner's rewards compute.
pub fn run(config: &Config) -> MigrateResult<ComputedRewards> {
    let cdps = load_cdps(&config.cdps_path, &config.address_prefix)?;
    let global_indexes = load_global_indexes(&config.indexes_path, &config.reward_denom)?;
    let claims = load_claims(&config.claims_path, &config.address_prefix)?;

    let rewards = calculate(claims, global_indexes, cdps)?;
    info!(owners = rewards.len(), entries = count_entries(&rewards), "Calculated missed rewards");
    for (collateral_type, total) in totals_by_collateral_type(&rewards) {
        info!(collateral_type = collateral_type.as_str(), total = %total, "Missed rewards total");
    }

    let out = create_output_string(&rewards, config)?;
    write_output(&config.output_path, &out)?;

    Ok(rewards)
}
