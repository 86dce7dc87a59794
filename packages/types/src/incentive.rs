use std::{collections::BTreeMap, fmt};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Decimal, Uint128};
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Current reward index per collateral type
pub type GlobalIndexes = BTreeMap<String, Decimal>;

/// Reward index of a single collateral type
#[cw_serde]
pub struct RewardIndex {
    pub collateral_type: String,
    pub reward_factor: Decimal,
}

pub type RewardIndexes = Vec<RewardIndex>;

/// Reward indexes of a collateral type as exported by the incentive module. The nested
/// `collateral_type` field of each entry holds the reward denom.
#[cw_serde]
pub struct MultiRewardIndex {
    pub collateral_type: String,
    pub reward_indexes: RewardIndexes,
}

/// Entries of a `{collateral_type: reward_factor}` object in document order. Repeated keys are
/// kept so they can be reported instead of silently overwritten.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatRewardIndexes(pub Vec<(String, Decimal)>);

impl Serialize for FlatRewardIndexes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (collateral_type, reward_factor) in &self.0 {
            map.serialize_entry(collateral_type, reward_factor)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FlatRewardIndexes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = FlatRewardIndexes;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of collateral type to reward factor")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Decimal>()? {
                    entries.push(entry);
                }
                Ok(FlatRewardIndexes(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl JsonSchema for FlatRewardIndexes {
    fn schema_name() -> String {
        GlobalIndexes::schema_name()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        GlobalIndexes::json_schema(gen)
    }
}

/// Accepted layouts of the global index snapshot
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum IndexSnapshot {
    /// `{"bnb-a": "0.25", ...}`
    Flat(FlatRewardIndexes),
    /// `[{"collateral_type": "bnb-a", "reward_indexes": [...]}, ...]`
    Multi(Vec<MultiRewardIndex>),
}

/// Reward amount carried forward from a previous sync
#[cw_serde]
pub struct UnclaimedReward {
    pub collateral_type: String,
    pub amount: Uint128,
}

/// Claim state of a single owner at the time of the export
#[cw_serde]
pub struct UsdxMintingClaim {
    pub owner: String,
    /// Reward index of each collateral type when the owner's rewards were last synced
    #[serde(default)]
    pub reward_indexes: RewardIndexes,
    /// Rewards accrued but not yet claimed, per collateral type
    #[serde(default)]
    pub unclaimed: Vec<UnclaimedReward>,
}

impl UsdxMintingClaim {
    pub fn synced_index(&self, collateral_type: &str) -> Option<Decimal> {
        self.reward_indexes
            .iter()
            .find(|ri| ri.collateral_type == collateral_type)
            .map(|ri| ri.reward_factor)
    }

    pub fn unclaimed_amount(&self, collateral_type: &str) -> Uint128 {
        self.unclaimed
            .iter()
            .find(|u| u.collateral_type == collateral_type)
            .map(|u| u.amount)
            .unwrap_or_default()
    }
}

pub type UsdxMintingClaims = Vec<UsdxMintingClaim>;

/// Owner and reward of a claim in the incentive module's genesis export
#[cw_serde]
pub struct BaseClaim {
    pub owner: String,
    pub reward: Coin,
}

/// A USDX minting claim as exported by the incentive module. The reward is a single coin rather
/// than per collateral type.
#[cw_serde]
pub struct ExportedUsdxMintingClaim {
    pub base_claim: BaseClaim,
    #[serde(default)]
    pub reward_indexes: RewardIndexes,
}

impl From<ExportedUsdxMintingClaim> for UsdxMintingClaim {
    /// The exported reward stays on the migrated claim, so nothing is carried forward here.
    fn from(claim: ExportedUsdxMintingClaim) -> Self {
        UsdxMintingClaim {
            owner: claim.base_claim.owner,
            reward_indexes: claim.reward_indexes,
            unclaimed: vec![],
        }
    }
}

/// Accepted layouts of a claim record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ClaimRecord {
    /// `{"owner": ..., "reward_indexes": [...], "unclaimed": [...]}`
    PerType(UsdxMintingClaim),
    /// `{"base_claim": {"owner": ..., "reward": {...}}, "reward_indexes": [...]}`
    Exported(ExportedUsdxMintingClaim),
}

impl From<ClaimRecord> for UsdxMintingClaim {
    fn from(record: ClaimRecord) -> Self {
        match record {
            ClaimRecord::PerType(claim) => claim,
            ClaimRecord::Exported(claim) => claim.into(),
        }
    }
}
