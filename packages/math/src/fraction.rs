use cosmwasm_std::{CheckedMultiplyFractionError, Fraction, Uint128, Uint256};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fractional<T>(pub T, pub T);

impl<T: Copy + From<u8> + PartialEq> Fraction<T> for Fractional<T> {
    fn numerator(&self) -> T {
        self.0
    }
    fn denominator(&self) -> T {
        self.1
    }
    fn inv(&self) -> Option<Self> {
        if self.numerator() == 0u8.into() {
            None
        } else {
            Some(Fractional(self.1, self.0))
        }
    }
}

pub trait FractionMath {
    /// Multiplies by a fraction and rounds the result to the nearest integer, ties to even.
    /// This is the rounding the chain applies when truncating a decimal amount to an integer
    /// (`sdk.Dec.RoundInt`), so rewards computed here match the ones paid out on chain.
    fn checked_mul_round_half_even<F: Fraction<T>, T: Into<Uint128>>(
        self,
        rhs: F,
    ) -> Result<Self, CheckedMultiplyFractionError>
    where
        Self: Sized;
}

impl FractionMath for Uint128 {
    fn checked_mul_round_half_even<F: Fraction<T>, T: Into<Uint128>>(
        self,
        rhs: F,
    ) -> Result<Self, CheckedMultiplyFractionError> {
        let numerator: Uint128 = rhs.numerator().into();
        let denominator: Uint128 = rhs.denominator().into();
        let divisor = Uint256::from(denominator);
        let product = self.full_mul(numerator);
        let quotient = product.checked_div(divisor)?;
        let remainder = product.checked_rem(divisor)?;

        let two = Uint256::from(2u8);
        let doubled_remainder = remainder.checked_mul(two)?;
        let round_up = doubled_remainder > divisor
            || (doubled_remainder == divisor && !quotient.checked_rem(two)?.is_zero());

        let rounded = if round_up {
            quotient.checked_add(Uint256::one())?
        } else {
            quotient
        };
        Ok(rounded.try_into()?)
    }
}
