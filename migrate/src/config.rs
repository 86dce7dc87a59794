use std::path::{Path, PathBuf};

/// Height of the kava-7 export the snapshots were taken from
pub const EXPORT_HEIGHT: u64 = 829_296;
pub const CHAIN_ID: &str = "kava-7";
pub const SNAPSHOT_DIR: &str = "./usdx_rewards";
pub const OUTPUT_FILE: &str = "rewards.rs";

/// Inputs, output and chain parameters of a migration run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub cdps_path: PathBuf,
    pub indexes_path: PathBuf,
    pub claims_path: PathBuf,
    pub output_path: PathBuf,
    /// Bech32 prefix every owner address must carry
    pub address_prefix: String,
    /// Denom whose index is used when the index snapshot lists several reward denoms
    pub reward_denom: String,
    pub chain_id: String,
    pub export_height: u64,
    /// Name of the constant declared in the generated file
    pub const_name: String,
}

impl Config {
    /// Conventional snapshot file names under `dir`. The output is written to the working
    /// directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            cdps_path: dir.join(format!("cdp-cdps-{EXPORT_HEIGHT}.json")),
            indexes_path: dir.join(format!("incentive-usdx-indexes-{EXPORT_HEIGHT}.json")),
            claims_path: dir.join(format!("incentive-usdx-claims-{EXPORT_HEIGHT}.json")),
            output_path: PathBuf::from(OUTPUT_FILE),
            address_prefix: "kava".to_string(),
            reward_denom: "ukava".to_string(),
            chain_id: CHAIN_ID.to_string(),
            export_height: EXPORT_HEIGHT,
            const_name: "MISSED_USDX_MINTING_REWARDS".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_dir(SNAPSHOT_DIR)
    }
}
