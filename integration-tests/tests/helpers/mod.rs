#![allow(dead_code)]

use serde_json::{json, Value};
use usdx_rewards::config::Config;
use usdx_rewards_testing::{addr, cdp, claim, SnapshotDir};
use usdx_rewards_types::{cdp::Cdps, incentive::UsdxMintingClaims};

pub const CDPS_FILE: &str = "cdp-cdps-829296.json";
pub const INDEXES_FILE: &str = "incentive-usdx-indexes-829296.json";
pub const CLAIMS_FILE: &str = "incentive-usdx-claims-829296.json";
pub const OUTPUT_FILE: &str = "rewards.rs";

/// Snapshot directory plus a config that reads from and writes into it
pub struct Migration {
    pub dir: SnapshotDir,
    pub config: Config,
}

impl Migration {
    pub fn new() -> anyhow::Result<Self> {
        let dir = SnapshotDir::new()?;
        let config = Config {
            output_path: dir.join(OUTPUT_FILE),
            ..Config::from_dir(dir.path())
        };
        Ok(Self {
            dir,
            config,
        })
    }

    pub fn write_cdps(&self, cdps: &Cdps) -> anyhow::Result<()> {
        self.dir.write_json(CDPS_FILE, cdps)?;
        Ok(())
    }

    pub fn write_indexes(&self, indexes: &Value) -> anyhow::Result<()> {
        self.dir.write_json(INDEXES_FILE, indexes)?;
        Ok(())
    }

    pub fn write_claims(&self, claims: &UsdxMintingClaims) -> anyhow::Result<()> {
        self.dir.write_json(CLAIMS_FILE, claims)?;
        Ok(())
    }

    pub fn output(&self) -> anyhow::Result<String> {
        self.dir.read(OUTPUT_FILE)
    }

    pub fn output_exists(&self) -> bool {
        self.config.output_path.exists()
    }
}

/// Three owners on usdx-a at global index 1.5:
/// - `addr(1)` synced at 1.0 with 100 debt
/// - `addr(2)` never synced with 50 debt
/// - `addr(3)` synced at 1.0 with 10 carried forward and no debt
pub fn scenario() -> anyhow::Result<Migration> {
    let migration = Migration::new()?;
    migration.write_cdps(&vec![cdp(&addr(1), "usdx-a", 100), cdp(&addr(2), "usdx-a", 50)])?;
    migration.write_indexes(&json!({"usdx-a": "1.5"}))?;
    migration.write_claims(&vec![
        claim(&addr(1), &[("usdx-a", "1.0")], &[]),
        claim(&addr(3), &[("usdx-a", "1.0")], &[("usdx-a", 10)]),
    ])?;
    Ok(migration)
}
