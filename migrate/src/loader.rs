use std::{fs, path::Path};

use itertools::Itertools;
use serde::de::DeserializeOwned;
use tracing::info;
use usdx_rewards_types::{
    cdp::Cdps,
    incentive::{
        ClaimRecord, FlatRewardIndexes, GlobalIndexes, IndexSnapshot, MultiRewardIndex,
        UsdxMintingClaims,
    },
};
use usdx_rewards_utils::{
    error::ValidationError,
    helpers::{validate_address, validate_collateral_type},
};

use crate::error::{DecodeError, SnapshotKind};

/// Reads and deserializes the contents of a JSON snapshot file.
pub fn fetch_from_json_file<T: DeserializeOwned>(
    kind: SnapshotKind,
    path: &Path,
) -> Result<T, DecodeError> {
    let bz = fs::read(path).map_err(|source| DecodeError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bz).map_err(|source| DecodeError::Json {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the exported CDPs, sorted by owner then collateral type.
pub fn load_cdps(path: &Path, address_prefix: &str) -> Result<Cdps, DecodeError> {
    let kind = SnapshotKind::Cdps;
    let invalid = |source: ValidationError| DecodeError::Validation {
        kind,
        path: path.to_path_buf(),
        source,
    };

    let mut cdps: Cdps = fetch_from_json_file(kind, path)?;

    for cdp in &cdps {
        validate_address(&cdp.owner, address_prefix).map_err(invalid)?;
        validate_collateral_type(&cdp.collateral_type).map_err(invalid)?;
        if let Some(fees) = &cdp.accumulated_fees {
            if fees.denom != cdp.principal.denom {
                return Err(DecodeError::FeeDenomMismatch {
                    owner: cdp.owner.clone(),
                    collateral_type: cdp.collateral_type.clone(),
                    principal_denom: cdp.principal.denom.clone(),
                    fees_denom: fees.denom.clone(),
                });
            }
        }
    }

    // one position per owner and collateral type
    let duplicate = cdps
        .iter()
        .map(|cdp| (cdp.owner.as_str(), cdp.collateral_type.as_str()))
        .duplicates()
        .next();
    if let Some((owner, collateral_type)) = duplicate {
        return Err(DecodeError::Duplicate {
            kind,
            path: path.to_path_buf(),
            key: format!("{owner}/{collateral_type}"),
        });
    }

    cdps.sort_by(|a, b| (&a.owner, &a.collateral_type).cmp(&(&b.owner, &b.collateral_type)));

    info!(path = %path.display(), count = cdps.len(), "Loaded cdps");
    Ok(cdps)
}

/// Loads the global reward index of every collateral type. Multi reward exports are reduced to
/// the index of `reward_denom`.
pub fn load_global_indexes(path: &Path, reward_denom: &str) -> Result<GlobalIndexes, DecodeError> {
    let kind = SnapshotKind::Indexes;

    let snapshot: IndexSnapshot = fetch_from_json_file(kind, path)?;
    let global_indexes = match snapshot {
        IndexSnapshot::Flat(entries) => convert_flat_reward_indexes(path, entries)?,
        IndexSnapshot::Multi(multi_indexes) => {
            convert_multi_reward_indexes(path, multi_indexes, reward_denom)?
        }
    };

    for collateral_type in global_indexes.keys() {
        validate_collateral_type(collateral_type).map_err(|source| DecodeError::Validation {
            kind,
            path: path.to_path_buf(),
            source,
        })?;
    }

    info!(path = %path.display(), count = global_indexes.len(), "Loaded global indexes");
    Ok(global_indexes)
}

fn convert_flat_reward_indexes(
    path: &Path,
    entries: FlatRewardIndexes,
) -> Result<GlobalIndexes, DecodeError> {
    if let Some(collateral_type) =
        entries.0.iter().map(|(collateral_type, _)| collateral_type.as_str()).duplicates().next()
    {
        return Err(DecodeError::Duplicate {
            kind: SnapshotKind::Indexes,
            path: path.to_path_buf(),
            key: collateral_type.to_string(),
        });
    }

    Ok(entries.0.into_iter().collect())
}

fn convert_multi_reward_indexes(
    path: &Path,
    multi_indexes: Vec<MultiRewardIndex>,
    reward_denom: &str,
) -> Result<GlobalIndexes, DecodeError> {
    if let Some(collateral_type) =
        multi_indexes.iter().map(|mri| mri.collateral_type.as_str()).duplicates().next()
    {
        return Err(DecodeError::Duplicate {
            kind: SnapshotKind::Indexes,
            path: path.to_path_buf(),
            key: collateral_type.to_string(),
        });
    }

    multi_indexes
        .into_iter()
        .map(|mri| -> Result<_, DecodeError> {
            let reward_factor = mri
                .reward_indexes
                .iter()
                .find(|ri| ri.collateral_type == reward_denom)
                .map(|ri| ri.reward_factor)
                .ok_or_else(|| DecodeError::MissingRewardIndex {
                    path: path.to_path_buf(),
                    collateral_type: mri.collateral_type.clone(),
                    reward_denom: reward_denom.to_string(),
                })?;
            Ok((mri.collateral_type, reward_factor))
        })
        .collect()
}

/// Loads the USDX minting claims, sorted by owner. Records may use the per collateral type layout
/// or the incentive module's genesis export layout.
pub fn load_claims(path: &Path, address_prefix: &str) -> Result<UsdxMintingClaims, DecodeError> {
    let kind = SnapshotKind::Claims;
    let invalid = |source: ValidationError| DecodeError::Validation {
        kind,
        path: path.to_path_buf(),
        source,
    };
    let duplicate = |key: String| DecodeError::Duplicate {
        kind,
        path: path.to_path_buf(),
        key,
    };

    let records: Vec<ClaimRecord> = fetch_from_json_file(kind, path)?;
    let mut claims: UsdxMintingClaims = records.into_iter().map(Into::into).collect();

    for claim in &claims {
        validate_address(&claim.owner, address_prefix).map_err(invalid)?;

        let synced_types = claim.reward_indexes.iter().map(|ri| ri.collateral_type.as_str());
        let unclaimed_types = claim.unclaimed.iter().map(|u| u.collateral_type.as_str());
        for collateral_type in synced_types.clone().chain(unclaimed_types.clone()) {
            validate_collateral_type(collateral_type).map_err(invalid)?;
        }

        if let Some(collateral_type) =
            synced_types.duplicates().next().or_else(|| unclaimed_types.duplicates().next())
        {
            return Err(duplicate(format!("{}/{collateral_type}", claim.owner)));
        }
    }

    if let Some(owner) = claims.iter().map(|claim| claim.owner.as_str()).duplicates().next() {
        return Err(duplicate(owner.to_string()));
    }

    claims.sort_by(|a, b| a.owner.cmp(&b.owner));

    info!(path = %path.display(), count = claims.len(), "Loaded claims");
    Ok(claims)
}
