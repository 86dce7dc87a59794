use bech32::{primitives::decode::CheckedHrpstring, Bech32};

use crate::error::ValidationError;

/// Payload lengths of account (20 bytes) and module (32 bytes) addresses
const ADDRESS_LENGTHS: [usize; 2] = [20, 32];

/// Follows cosmos SDK denom validation, which collateral types share: 3 - 128 characters long,
/// starting with a letter, followed by letters, numbers, or separators ( ‘/' , ‘:' , ‘.’ , ‘_’ , or '-').
/// reference: https://github.com/cosmos/cosmos-sdk/blob/7728516abfab950dc7a9120caad4870f1f962df5/types/coin.go#L865-L867
pub fn validate_collateral_type(collateral_type: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidCollateralType {
        collateral_type: collateral_type.to_string(),
        reason: reason.to_string(),
    };

    if collateral_type.len() < 3 || collateral_type.len() > 128 {
        return Err(invalid("Invalid length"));
    }

    let mut chars = collateral_type.chars();
    if !chars.next().is_some_and(|first| first.is_ascii_alphabetic()) {
        return Err(invalid("First character is not ASCII alphabetic"));
    }

    let set = ['/', ':', '.', '_', '-'];
    if !chars.all(|c| c.is_ascii_alphanumeric() || set.contains(&c)) {
        return Err(invalid("Not all characters are ASCII alphanumeric or one of:  /  :  .  _  -"));
    }

    Ok(())
}

/// Checks that `address` is bech32 encoded with the expected human readable prefix and carries
/// an account or module address payload. Bech32m checksums are rejected.
pub fn validate_address(address: &str, prefix: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    let checked =
        CheckedHrpstring::new::<Bech32>(address).map_err(|err| invalid(err.to_string()))?;
    let hrp = checked.hrp();
    if hrp.as_str() != prefix {
        return Err(invalid(format!("expected prefix {prefix}, got {}", hrp.as_str())));
    }
    let len = checked.byte_iter().count();
    if !ADDRESS_LENGTHS.contains(&len) {
        return Err(invalid(format!("unexpected payload length {len}")));
    }

    Ok(())
}
