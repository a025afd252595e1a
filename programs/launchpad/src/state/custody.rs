//! Custody state
//!
//! One record per accepted token: the program-owned vault, the oracle binding
//! with its staleness and confidence bounds, and the withdrawable quote fees.

use anchor_lang::prelude::*;

use crate::{
    error::LaunchpadError,
    state::{OracleParams, OraclePrice, OracleType},
    utils::SafeMath,
};

#[account]
#[derive(Default, Debug)]
pub struct Custody {
    pub token_account: Pubkey,
    pub collected_fees: u64,
    pub mint: Pubkey,
    pub decimals: u8,
    pub max_oracle_price_error: u32,
    pub max_oracle_price_age_sec: u32,
    pub oracle_type: OracleType,
    pub oracle_account: Pubkey,
    pub bump: u8,
}

impl Custody {
    pub const LEN: usize = 8 + // discriminator
        32 + // token_account
        8 + // collected_fees
        32 + // mint
        1 + // decimals
        OracleParams::LEN +
        1; // bump

    pub fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        token_account: Pubkey,
        mint: Pubkey,
        decimals: u8,
        oracle: &OracleParams,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), LaunchpadError::AlreadyInitialized);
        require!(mint != Pubkey::default(), LaunchpadError::InvalidArgument);
        self.token_account = token_account;
        self.collected_fees = 0;
        self.mint = mint;
        self.decimals = decimals;
        self.set_oracle_config(oracle);
        self.bump = bump;
        Ok(())
    }

    /// Only oracle parameters are mutable; vault and mint identity are fixed
    pub fn set_oracle_config(&mut self, oracle: &OracleParams) {
        self.max_oracle_price_error = oracle.max_oracle_price_error;
        self.max_oracle_price_age_sec = oracle.max_oracle_price_age_sec;
        self.oracle_type = oracle.oracle_type;
        self.oracle_account = oracle.oracle_account;
    }

    pub fn oracle_params(&self) -> OracleParams {
        OracleParams {
            max_oracle_price_error: self.max_oracle_price_error,
            max_oracle_price_age_sec: self.max_oracle_price_age_sec,
            oracle_type: self.oracle_type,
            oracle_account: self.oracle_account,
        }
    }

    /// Read and validate the bound oracle at time `now`
    pub fn read_price(&self, oracle_account: &AccountInfo, now: i64) -> Result<OraclePrice> {
        OraclePrice::new_from_oracle(oracle_account, &self.oracle_params(), now)
    }

    pub fn record_fee(&mut self, fee: u64) -> Result<()> {
        self.collected_fees = self
            .collected_fees
            .checked_add(fee)
            .ok_or(LaunchpadError::FeeOverflow)?;
        Ok(())
    }

    /// Decrement the accumulator; the caller performs the token transfer
    pub fn withdraw_fees(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.collected_fees, LaunchpadError::InsufficientFees);
        self.collected_fees = self.collected_fees.safe_sub(amount)?;
        Ok(())
    }
}
