use std::str::FromStr;

use bech32::{Bech32, Hrp};
use cosmwasm_std::{coin, Decimal, Uint128};
use usdx_rewards_types::{
    cdp::Cdp,
    incentive::{GlobalIndexes, RewardIndex, UnclaimedReward, UsdxMintingClaim},
    rewards::OwnerRewards,
};

pub const ADDRESS_PREFIX: &str = "kava";
pub const DEBT_DENOM: &str = "usdx";
pub const REWARD_DENOM: &str = "ukava";

/// Deterministic account address built from a one byte seed
pub fn addr(seed: u8) -> String {
    addr_with_prefix(ADDRESS_PREFIX, seed)
}

pub fn addr_with_prefix(prefix: &str, seed: u8) -> String {
    let hrp = Hrp::parse(prefix).expect("valid hrp");
    bech32::encode::<Bech32>(hrp, &[seed; 20]).expect("valid bech32 payload")
}

pub fn decimal(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal")
}

pub fn cdp(owner: &str, collateral_type: &str, principal: u128) -> Cdp {
    Cdp {
        id: None,
        owner: owner.to_string(),
        collateral_type: collateral_type.to_string(),
        collateral: None,
        principal: coin(principal, DEBT_DENOM),
        accumulated_fees: None,
    }
}

pub fn cdp_with_fees(owner: &str, collateral_type: &str, principal: u128, fees: u128) -> Cdp {
    Cdp {
        accumulated_fees: Some(coin(fees, DEBT_DENOM)),
        ..cdp(owner, collateral_type, principal)
    }
}

/// Builds a claim from `(collateral_type, synced_index)` and `(collateral_type, unclaimed)` pairs
pub fn claim(owner: &str, indexes: &[(&str, &str)], unclaimed: &[(&str, u128)]) -> UsdxMintingClaim {
    UsdxMintingClaim {
        owner: owner.to_string(),
        reward_indexes: indexes
            .iter()
            .map(|(collateral_type, factor)| RewardIndex {
                collateral_type: collateral_type.to_string(),
                reward_factor: decimal(factor),
            })
            .collect(),
        unclaimed: unclaimed
            .iter()
            .map(|(collateral_type, amount)| UnclaimedReward {
                collateral_type: collateral_type.to_string(),
                amount: Uint128::new(*amount),
            })
            .collect(),
    }
}

pub fn global_indexes(indexes: &[(&str, &str)]) -> GlobalIndexes {
    indexes
        .iter()
        .map(|(collateral_type, factor)| (collateral_type.to_string(), decimal(factor)))
        .collect()
}

pub fn owner_rewards(amounts: &[(&str, u128)]) -> OwnerRewards {
    amounts
        .iter()
        .map(|(collateral_type, amount)| (collateral_type.to_string(), Uint128::new(*amount)))
        .collect()
}
