use std::collections::{btree_map::Entry, BTreeMap};

use cosmwasm_std::{CheckedMultiplyFractionError, Decimal, Uint128};
use itertools::Itertools;
use tracing::{debug, warn};
use usdx_rewards_math::FractionMath;
use usdx_rewards_types::{
    cdp::Cdps,
    incentive::{GlobalIndexes, UsdxMintingClaim, UsdxMintingClaims},
    rewards::{ComputedRewards, OwnerRewards},
};

use crate::{CalculationError, CalculationResult};

/// Total principal per collateral type of a single owner
type OwnerDebts = BTreeMap<String, Uint128>;

/// `RewardsCalculator` recomputes the USDX minting rewards owners accrued between their last
/// claim sync and the export height. All data is passed in up front and nothing is mutated, so
/// the same inputs always produce the same rewards.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardsCalculator {
    claims: BTreeMap<String, UsdxMintingClaim>,
    global_indexes: GlobalIndexes,
    debts: BTreeMap<String, OwnerDebts>,
}

impl RewardsCalculator {
    pub fn new(
        claims: UsdxMintingClaims,
        global_indexes: GlobalIndexes,
        cdps: Cdps,
    ) -> CalculationResult<Self> {
        let mut claims_by_owner = BTreeMap::new();
        for claim in claims {
            match claims_by_owner.entry(claim.owner.clone()) {
                Entry::Occupied(_) => return Err(CalculationError::DuplicateClaim(claim.owner)),
                Entry::Vacant(entry) => {
                    entry.insert(claim);
                }
            }
        }

        let mut debts: BTreeMap<String, OwnerDebts> = BTreeMap::new();
        for cdp in cdps {
            let total_principal = cdp
                .total_principal()
                .map_err(|e| CalculationError::overflow(&cdp.owner, &cdp.collateral_type, e))?;
            let debt = debts
                .entry(cdp.owner.clone())
                .or_default()
                .entry(cdp.collateral_type.clone())
                .or_default();
            *debt = debt
                .checked_add(total_principal)
                .map_err(|e| CalculationError::overflow(&cdp.owner, &cdp.collateral_type, e))?;
        }

        Ok(Self {
            claims: claims_by_owner,
            global_indexes,
            debts,
        })
    }

    /// Computes the rewards of every owner holding a claim, a CDP, or both
    pub fn calculate(&self) -> CalculationResult<ComputedRewards> {
        self.claims
            .keys()
            .merge(self.debts.keys())
            .dedup()
            .map(|owner| Ok((owner.clone(), self.calculate_owner_rewards(owner)?)))
            .collect()
    }

    fn calculate_owner_rewards(&self, owner: &str) -> CalculationResult<OwnerRewards> {
        let claim = self.claims.get(owner);
        let debts = self.debts.get(owner);
        let mut rewards = OwnerRewards::new();

        for (collateral_type, &global_index) in &self.global_indexes {
            // Owners that never synced start at the current index and accrue nothing retroactively
            let synced_index =
                claim.and_then(|c| c.synced_index(collateral_type)).unwrap_or(global_index);
            if synced_index > global_index {
                return Err(CalculationError::NegativeRewardDelta {
                    owner: owner.to_string(),
                    collateral_type: collateral_type.clone(),
                    synced_index,
                    global_index,
                });
            }

            let debt =
                debts.and_then(|d| d.get(collateral_type)).copied().unwrap_or_default();
            let accrued = compute_accrued_rewards(debt, synced_index, global_index)
                .map_err(|e| CalculationError::overflow(owner, collateral_type, e))?;
            let unclaimed = claim.map(|c| c.unclaimed_amount(collateral_type)).unwrap_or_default();
            let total = accrued
                .checked_add(unclaimed)
                .map_err(|e| CalculationError::overflow(owner, collateral_type, e))?;

            if !total.is_zero() {
                rewards.insert(collateral_type.clone(), total);
            }
        }

        // Unclaimed rewards of collateral types that no longer have an index are still owed
        if let Some(claim) = claim {
            for unclaimed in &claim.unclaimed {
                if !self.global_indexes.contains_key(&unclaimed.collateral_type)
                    && !unclaimed.amount.is_zero()
                {
                    rewards.entry(unclaimed.collateral_type.clone()).or_insert(unclaimed.amount);
                }
            }
        }

        if let Some(debts) = debts {
            for (collateral_type, debt) in debts {
                if !self.global_indexes.contains_key(collateral_type) {
                    warn!(
                        owner,
                        collateral_type = collateral_type.as_str(),
                        debt = %debt,
                        "No global reward index for collateral type, debt accrues nothing"
                    );
                }
            }
        }

        debug!(owner, entries = rewards.len(), "Computed owner rewards");
        Ok(rewards)
    }
}

/// Computes the rewards accrued by `debt` between the owner's synced index and the global index.
/// The global index must be up to date and not behind the synced index.
pub fn compute_accrued_rewards(
    debt: Uint128,
    synced_index: Decimal,
    global_index: Decimal,
) -> Result<Uint128, CheckedMultiplyFractionError> {
    let index_delta = global_index.checked_sub(synced_index)?;
    debt.checked_mul_round_half_even(index_delta)
}

/// Recomputes the rewards of every owner appearing in `claims` or `cdps`. Owners whose rewards
/// are all zero are kept with an empty entry.
pub fn calculate(
    claims: UsdxMintingClaims,
    global_indexes: GlobalIndexes,
    cdps: Cdps,
) -> CalculationResult<ComputedRewards> {
    RewardsCalculator::new(claims, global_indexes, cdps)?.calculate()
}
