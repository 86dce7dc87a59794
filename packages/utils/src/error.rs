use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid collateral type {collateral_type}: {reason}")]
    InvalidCollateralType {
        collateral_type: String,
        reason: String,
    },

    #[error("Invalid address {address}: {reason}")]
    InvalidAddress {
        address: String,
        reason: String,
    },
}
