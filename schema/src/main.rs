use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

fn main() {
    snapshots();
    rewards();
}

fn snapshots() {
    use usdx_rewards_types::cdp::Cdp;
    use usdx_rewards_types::incentive::{ClaimRecord, IndexSnapshot, UsdxMintingClaim};

    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema/schema/usdx_rewards_snapshots");

    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(Cdp), &out_dir);
    export_schema(&schema_for!(IndexSnapshot), &out_dir);
    export_schema(&schema_for!(UsdxMintingClaim), &out_dir);
    export_schema(&schema_for!(ClaimRecord), &out_dir);
}

fn rewards() {
    use usdx_rewards_types::rewards::ComputedRewards;

    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema/schema/usdx_rewards");

    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ComputedRewards), &out_dir);
}
