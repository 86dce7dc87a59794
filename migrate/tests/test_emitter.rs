use std::fs;

use cosmwasm_std::Uint128;
use usdx_rewards::{
    config::Config,
    emitter::{create_output_string, write_output, GENERATED_HEADER},
    error::MigrateError,
};
use usdx_rewards_testing::{owner_rewards, SnapshotDir};
use usdx_rewards_types::rewards::{ComputedRewards, OwnerRewards};

#[test]
fn renders_rewards_as_rust_constant() {
    let rewards = ComputedRewards::from([
        ("kava1b".to_string(), owner_rewards(&[("usdx-a", 10)])),
        ("kava1a".to_string(), owner_rewards(&[("usdx-a", 50), ("bnb-a", 3)])),
        ("kava1c".to_string(), OwnerRewards::new()),
    ]);

    let out = create_output_string(&rewards, &Config::default()).unwrap();

    let expected = concat!(
        "// Code generated by usdx-rewards. DO NOT EDIT.\n",
        "// Rewards accrued on kava-7 up to height 829296 that were missed by the upgrade.\n",
        "\n",
        "pub const MISSED_USDX_MINTING_REWARDS: &str = r#\"",
        r#"{"kava1a":{"bnb-a":"3","usdx-a":"50"},"kava1b":{"usdx-a":"10"},"kava1c":{}}"#,
        "\"#;\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn empty_rewards_render_empty_object() {
    let out = create_output_string(&ComputedRewards::new(), &Config::default()).unwrap();

    assert!(out.starts_with(GENERATED_HEADER));
    assert!(out.ends_with("= r#\"{}\"#;\n"));
}

#[test]
fn uses_configured_chain_and_constant_name() {
    let config = Config {
        chain_id: "kava-testnet-12000".to_string(),
        export_height: 42,
        const_name: "TESTNET_REWARDS".to_string(),
        ..Config::default()
    };

    let out = create_output_string(&ComputedRewards::new(), &config).unwrap();

    assert!(out.contains("// Rewards accrued on kava-testnet-12000 up to height 42 that"));
    assert!(out.contains("pub const TESTNET_REWARDS: &str"));
}

#[test]
fn embedded_json_parses_back_to_rewards() {
    let rewards = ComputedRewards::from([(
        "kava1a".to_string(),
        OwnerRewards::from([("usdx-a".to_string(), Uint128::new(u128::MAX))]),
    )]);

    let out = create_output_string(&rewards, &Config::default()).unwrap();

    let start = out.find("r#\"").unwrap() + 3;
    let end = out.rfind("\"#;").unwrap();
    let parsed: ComputedRewards = serde_json::from_str(&out[start..end]).unwrap();
    assert_eq!(parsed, rewards);
}

#[test]
fn output_is_deterministic() {
    let rewards = ComputedRewards::from([
        ("kava1z".to_string(), owner_rewards(&[("usdx-a", 1)])),
        ("kava1a".to_string(), owner_rewards(&[("usdx-a", 2)])),
    ]);

    let first = create_output_string(&rewards, &Config::default()).unwrap();
    let second = create_output_string(&rewards.clone(), &Config::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn replaces_existing_output() -> anyhow::Result<()> {
    let dir = SnapshotDir::new()?;
    let path = dir.write_raw("rewards.rs", "stale contents that are much longer than the new ones")?;

    write_output(&path, "fresh")?;

    assert_eq!(dir.read("rewards.rs")?, "fresh");
    Ok(())
}

#[test]
fn unwritable_output_is_io_error() -> anyhow::Result<()> {
    let dir = SnapshotDir::new()?;
    let path = dir.join("missing").join("rewards.rs");

    let err = write_output(&path, "contents").unwrap_err();

    match err {
        MigrateError::Io {
            path: err_path,
            ..
        } => assert_eq!(err_path, path),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(!path.exists());
    assert!(fs::read_dir(dir.path())?.next().is_none());
    Ok(())
}
