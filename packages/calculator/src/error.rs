use cosmwasm_std::{CheckedMultiplyFractionError, Decimal};
use thiserror::Error;

pub type CalculationResult<T> = Result<T, CalculationError>;

#[derive(Error, Debug, PartialEq)]
pub enum CalculationError {
    #[error(
        "Synced index {synced_index} of {owner} for {collateral_type} is greater than the global index {global_index}"
    )]
    NegativeRewardDelta {
        owner: String,
        collateral_type: String,
        synced_index: Decimal,
        global_index: Decimal,
    },

    #[error("Overflow computing rewards of {owner} for {collateral_type}: {source}")]
    Overflow {
        owner: String,
        collateral_type: String,
        source: CheckedMultiplyFractionError,
    },

    #[error("Duplicate claim for {0}")]
    DuplicateClaim(String),
}

impl CalculationError {
    pub(crate) fn overflow(
        owner: &str,
        collateral_type: &str,
        source: impl Into<CheckedMultiplyFractionError>,
    ) -> Self {
        CalculationError::Overflow {
            owner: owner.to_string(),
            collateral_type: collateral_type.to_string(),
            source: source.into(),
        }
    }
}
