use cosmwasm_std::{coin, Decimal, Uint128};
use proptest::{
    collection::{btree_map, vec},
    prelude::{any, Strategy},
    sample::select,
};
use usdx_rewards_testing::{addr, DEBT_DENOM};
use usdx_rewards_types::{
    cdp::{Cdp, Cdps},
    incentive::{GlobalIndexes, RewardIndex, UnclaimedReward, UsdxMintingClaim, UsdxMintingClaims},
};

pub const COLLATERAL_TYPES: [&str; 4] = ["bnb-a", "btcb-a", "usdx-a", "xrpb-a"];

/// Inputs of a single calculation
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub claims: UsdxMintingClaims,
    pub global_indexes: GlobalIndexes,
    pub cdps: Cdps,
}

fn random_owner() -> impl Strategy<Value = String> {
    (0u8..32).prop_map(addr)
}

fn random_collateral_type() -> impl Strategy<Value = String> {
    select(COLLATERAL_TYPES.to_vec()).prop_map(str::to_string)
}

fn random_index() -> impl Strategy<Value = Decimal> {
    (0u128..=100_000, 0u32..6).prop_map(|(atomics, places)| {
        Decimal::from_atomics(atomics, places).expect("index within decimal range")
    })
}

fn random_amount() -> impl Strategy<Value = Uint128> {
    (0u128..1_000_000_000_000).prop_map(Uint128::new)
}

fn random_global_indexes() -> impl Strategy<Value = GlobalIndexes> {
    btree_map(random_collateral_type(), random_index(), 0..=COLLATERAL_TYPES.len())
}

fn random_cdps() -> impl Strategy<Value = Cdps> {
    vec((random_owner(), random_collateral_type(), random_amount()), 0..20).prop_map(|cdps| {
        cdps.into_iter()
            .map(|(owner, collateral_type, principal)| Cdp {
                id: None,
                owner,
                collateral_type,
                collateral: None,
                principal: coin(principal.u128(), DEBT_DENOM),
                accumulated_fees: None,
            })
            .collect()
    })
}

/// Claims with one entry per owner whose synced indexes are a fraction of the global index,
/// so they never run ahead of it
fn random_claims(global_indexes: GlobalIndexes) -> impl Strategy<Value = UsdxMintingClaims> {
    btree_map(
        random_owner(),
        vec((random_collateral_type(), 0u64..=100, random_amount(), any::<bool>()), 0..4),
        0..20,
    )
    .prop_map(move |claims| {
        claims
            .into_iter()
            .map(|(owner, entries)| {
                let mut claim = UsdxMintingClaim {
                    owner,
                    reward_indexes: vec![],
                    unclaimed: vec![],
                };
                for (collateral_type, percent, amount, synced) in entries {
                    if synced && claim.synced_index(&collateral_type).is_none() {
                        let global = global_indexes
                            .get(&collateral_type)
                            .copied()
                            .unwrap_or_default();
                        claim.reward_indexes.push(RewardIndex {
                            collateral_type: collateral_type.clone(),
                            reward_factor: global * Decimal::percent(percent),
                        });
                    }
                    if claim.unclaimed.iter().all(|u| u.collateral_type != collateral_type) {
                        claim.unclaimed.push(UnclaimedReward {
                            collateral_type,
                            amount,
                        });
                    }
                }
                claim
            })
            .collect()
    })
}

pub fn random_snapshot() -> impl Strategy<Value = Snapshot> {
    random_global_indexes().prop_flat_map(|global_indexes| {
        (random_claims(global_indexes.clone()), random_cdps()).prop_map(move |(claims, cdps)| {
            Snapshot {
                claims,
                global_indexes: global_indexes.clone(),
                cdps,
            }
        })
    })
}
