use std::{io, path::PathBuf};

use thiserror::Error;
use usdx_rewards_calculator::CalculationError;
use usdx_rewards_utils::error::ValidationError;

pub type MigrateResult<T> = Result<T, MigrateError>;

#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SnapshotKind {
    Cdps,
    Indexes,
    Claims,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read {kind} snapshot {}: {source}", .path.display())]
    Read {
        kind: SnapshotKind,
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to parse {kind} snapshot {}: {source}", .path.display())]
    Json {
        kind: SnapshotKind,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid {kind} snapshot {}: {source}", .path.display())]
    Validation {
        kind: SnapshotKind,
        path: PathBuf,
        source: ValidationError,
    },

    #[error("Duplicate entry {key} in {kind} snapshot {}", .path.display())]
    Duplicate {
        kind: SnapshotKind,
        path: PathBuf,
        key: String,
    },

    #[error("Collateral type {collateral_type} has no {reward_denom} reward index in {}", .path.display())]
    MissingRewardIndex {
        path: PathBuf,
        collateral_type: String,
        reward_denom: String,
    },

    #[error("Fees of the {collateral_type} cdp of {owner} are in {fees_denom}, its principal is in {principal_denom}")]
    FeeDenomMismatch {
        owner: String,
        collateral_type: String,
        principal_denom: String,
        fees_denom: String,
    },
}

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    Calculation(#[from] CalculationError),

    #[error("Failed to encode rewards: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}
