//! FeeLedger
//!
//! Applies fee fractions to action amounts and routes the result into the
//! launchpad's lifetime accumulators and, for quote-asset fees, into the
//! withdrawable balance of the custody that received the payment.

use anchor_lang::prelude::*;

use crate::{
    error::LaunchpadError,
    state::{Custody, Fee, FeeAsset, FeeKind, Launchpad},
    utils::mul_div_u64,
};

impl Fee {
    pub fn validate(&self) -> Result<()> {
        require!(self.denominator > 0, LaunchpadError::InvalidFraction);
        Ok(())
    }

    /// `floor(amount * numerator / denominator)`
    pub fn apply(&self, amount: u64) -> Result<u64> {
        self.validate()?;
        mul_div_u64(amount, self.numerator, self.denominator)
    }
}

pub struct FeeLedger;

impl FeeLedger {
    /// Charge `kind` on `amount` into the launchpad accumulator; returns the fee
    pub fn record_fee(launchpad: &mut Launchpad, kind: FeeKind, amount: u64) -> Result<u64> {
        let fee = launchpad.fee(kind).apply(amount)?;
        let collected = launchpad.collected_mut(kind);
        *collected = collected
            .checked_add(fee)
            .ok_or(LaunchpadError::FeeOverflow)?;
        Ok(fee)
    }

    /// Charge a quote-asset fee into both the launchpad and custody accumulators.
    /// Neither record is written unless both additions succeed.
    pub fn record_quote_fee(
        launchpad: &mut Launchpad,
        custody: &mut Custody,
        kind: FeeKind,
        amount: u64,
    ) -> Result<u64> {
        require!(kind.asset() == FeeAsset::Quote, LaunchpadError::InvalidArgument);
        let fee = launchpad.fee(kind).apply(amount)?;
        let launchpad_total = launchpad
            .collected_mut(kind)
            .checked_add(fee)
            .ok_or(LaunchpadError::FeeOverflow)?;
        custody.record_fee(fee)?;
        *launchpad.collected_mut(kind) = launchpad_total;
        Ok(fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_truncates_toward_zero() {
        let fee = Fee { numerator: 1, denominator: 100 };
        assert_eq!(fee.apply(99).unwrap(), 0);
        assert_eq!(fee.apply(100).unwrap(), 1);
        assert_eq!(fee.apply(12_345).unwrap(), 123);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let fee = Fee { numerator: 1, denominator: 0 };
        assert!(fee.apply(100).is_err());
    }
}
