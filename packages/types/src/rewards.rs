use std::collections::BTreeMap;

use cosmwasm_std::Uint128;

/// Missed rewards of a single owner, keyed by collateral type. Zero amounts are never stored.
pub type OwnerRewards = BTreeMap<String, Uint128>;

/// Missed rewards of every owner, keyed by bech32 owner address
pub type ComputedRewards = BTreeMap<String, OwnerRewards>;

/// Counts the non-zero (owner, collateral type) entries
pub fn count_entries(rewards: &ComputedRewards) -> usize {
    rewards.values().map(BTreeMap::len).sum()
}

/// Sums every reward amount, per collateral type. Used for reporting only, so it saturates.
pub fn totals_by_collateral_type(rewards: &ComputedRewards) -> OwnerRewards {
    let mut totals = OwnerRewards::new();
    for (collateral_type, amount) in rewards.values().flatten() {
        let total = totals.entry(collateral_type.clone()).or_default();
        *total = total.saturating_add(*amount);
    }
    totals
}
