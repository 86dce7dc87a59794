use cosmwasm_std::{Coin, OverflowError, Uint128, Uint64};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A collateralized debt position as exported by the cdp module.
///
/// Exports carry more fields than are read here (`fees_updated`, `interest_factor`, ...), so
/// unknown fields are ignored rather than rejected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Cdp {
    /// Position id, unique per chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uint64>,
    /// Bech32 address of the position owner
    pub owner: String,
    /// Collateral type the position is opened against (e.g. `bnb-a`)
    #[serde(rename = "type")]
    pub collateral_type: String,
    /// Collateral locked in the position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collateral: Option<Coin>,
    /// Debt minted against the collateral
    pub principal: Coin,
    /// Stability fees accrued on the principal and not yet paid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accumulated_fees: Option<Coin>,
}

impl Cdp {
    /// Principal plus accumulated fees. This is the debt amount rewards accrue on.
    pub fn total_principal(&self) -> Result<Uint128, OverflowError> {
        match &self.accumulated_fees {
            Some(fees) => self.principal.amount.checked_add(fees.amount),
            None => Ok(self.principal.amount),
        }
    }
}

pub type Cdps = Vec<Cdp>;

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use super::*;

    #[test]
    fn deserializes_export_record_ignoring_unknown_fields() {
        let json = r#"{
            "id": "12",
            "owner": "kava1owner",
            "type": "bnb-a",
            "collateral": {"denom": "bnb", "amount": "1000000"},
            "principal": {"denom": "usdx", "amount": "500"},
            "accumulated_fees": {"denom": "usdx", "amount": "7"},
            "fees_updated": "2021-03-04T15:00:00Z",
            "interest_factor": "1.000000001"
        }"#;

        let cdp: Cdp = serde_json::from_str(json).unwrap();
        assert_eq!(cdp.id, Some(Uint64::new(12)));
        assert_eq!(cdp.owner, "kava1owner");
        assert_eq!(cdp.collateral_type, "bnb-a");
        assert_eq!(cdp.principal, coin(500, "usdx"));
        assert_eq!(cdp.total_principal().unwrap(), Uint128::new(507));
    }

    #[test]
    fn total_principal_without_fees() {
        let cdp = Cdp {
            id: None,
            owner: "kava1owner".to_string(),
            collateral_type: "usdx-a".to_string(),
            collateral: None,
            principal: coin(100, "usdx"),
            accumulated_fees: None,
        };
        assert_eq!(cdp.total_principal().unwrap(), Uint128::new(100));
    }

    #[test]
    fn total_principal_overflow() {
        let cdp = Cdp {
            id: None,
            owner: "kava1owner".to_string(),
            collateral_type: "usdx-a".to_string(),
            collateral: None,
            principal: coin(u128::MAX, "usdx"),
            accumulated_fees: Some(coin(1, "usdx")),
        };
        assert!(cdp.total_principal().is_err());
    }
}
