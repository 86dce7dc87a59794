use std::{fs, path::Path};

use tracing::info;
use usdx_rewards_types::rewards::ComputedRewards;
use usdx_rewards_utils::json::to_sorted_json;

use crate::{
    config::Config,
    error::{MigrateError, MigrateResult},
};

pub const GENERATED_HEADER: &str = "// Code generated by usdx-rewards. DO NOT EDIT.";

/// Renders the rewards as canonical JSON embedded in a generated Rust constant.
pub fn create_output_string(
    rewards: &ComputedRewards,
    config: &Config,
) -> serde_json::Result<String> {
    // sort json keys so changes are easier to compare
    let json = to_sorted_json(rewards)?;
    let hashes = "#".repeat(raw_string_hashes(&json));

    Ok(format!(
        "{GENERATED_HEADER}\n\
         // Rewards accrued on {chain_id} up to height {height} that were missed by the upgrade.\n\
         \n\
         pub const {const_name}: &str = r{hashes}\"{json}\"{hashes};\n",
        chain_id = config.chain_id,
        height = config.export_height,
        const_name = config.const_name,
    ))
}

/// Number of `#` needed so the raw string delimiter can't appear in `contents`
fn raw_string_hashes(contents: &str) -> usize {
    contents
        .split('"')
        .skip(1)
        .map(|rest| rest.chars().take_while(|&c| c == '#').count())
        .max()
        .unwrap_or(0)
        + 1
}

/// Writes the generated file, replacing any previous version.
pub fn write_output(path: &Path, contents: &str) -> MigrateResult<()> {
    fs::write(path, contents).map_err(|source| MigrateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = contents.len(), "Wrote generated rewards");
    Ok(())
}
