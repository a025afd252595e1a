//! Oracle price feeds
//!
//! Custodies bind to either an in-program test feed or a Pyth PriceUpdateV2
//! account. Feeds are untrusted input: every read is checked for staleness,
//! confidence width and exponent range before a price is handed out.

use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_POWER, MAX_ORACLE_EXPONENT},
    error::LaunchpadError,
    utils::{checked_as_u64, checked_pow10, SafeMath},
};

/// Pyth Solana Receiver program ID (same for mainnet and devnet)
/// rec5EKMGg6MxZYaMdyBfgwp4d5rB9T1VQH5pJv5LtFJ
pub const PYTH_RECEIVER_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    0x0c, 0xb7, 0xfa, 0xbb, 0x52, 0xf7, 0xa6, 0x48, 0xbb, 0x5b, 0x31, 0x7d, 0x9a, 0x01, 0x8b,
    0x90, 0x57, 0xcb, 0x02, 0x47, 0x74, 0xfa, 0xfe, 0x01, 0xe6, 0xc4, 0xdf, 0x98, 0xcc, 0x38,
    0x58, 0x81,
]);

// PriceUpdateV2 layout:
//   [0..8]   discriminator
//   [8..40]  write_authority
//   [40]     verification_level (0 = Partial{u8}, 1 = Full)
//   [base..] feed_id(32) price(i64) conf(u64) expo(i32) publish_time(i64)
const PRICE_UPDATE_V2_MIN_LEN: usize = 134;
const PYTH_VERIFICATION_LEVEL_OFF: usize = 40;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum OracleType {
    #[default]
    None,
    Test,
    Pyth,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct OracleParams {
    /// Maximum confidence interval, in BPS of the price
    pub max_oracle_price_error: u32,
    pub max_oracle_price_age_sec: u32,
    pub oracle_type: OracleType,
    pub oracle_account: Pubkey,
}

impl OracleParams {
    pub const LEN: usize = 4 + 4 + 1 + 32;
}

/// Price feed record written by `set_test_oracle_price`
#[account]
#[derive(Default, Debug)]
pub struct TestOracle {
    pub price: u64,
    pub expo: i32,
    pub conf: u64,
    pub publish_time: i64,
}

impl TestOracle {
    pub const LEN: usize = 8 + 8 + 4 + 8 + 8;
}

/// Raw feed sample as published by an oracle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleFeed {
    pub price: i64,
    pub conf: u64,
    pub expo: i32,
    pub publish_time: i64,
}

/// Validated price `price * 10^exponent`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OraclePrice {
    pub price: u64,
    pub exponent: i32,
}

impl OracleFeed {
    /// Validate the sample against custody bounds at time `now`
    pub fn validate(&self, params: &OracleParams, now: i64) -> Result<OraclePrice> {
        require!(self.price > 0, LaunchpadError::InvalidOraclePrice);
        require!(
            self.expo.unsigned_abs() <= MAX_ORACLE_EXPONENT as u32,
            LaunchpadError::InvalidOraclePrice
        );

        let age = now.saturating_sub(self.publish_time);
        if age > params.max_oracle_price_age_sec as i64 {
            msg!(
                "Stale oracle price: published {}, now {}, max age {}",
                self.publish_time,
                now,
                params.max_oracle_price_age_sec
            );
            return err!(LaunchpadError::OracleStale);
        }

        let price = self.price as u64;
        let lhs = (self.conf as u128).safe_mul(BPS_POWER as u128)?;
        let rhs = (price as u128).safe_mul(params.max_oracle_price_error as u128)?;
        if lhs > rhs {
            msg!(
                "Oracle confidence too wide: conf {}, price {}, max error {} bps",
                self.conf,
                price,
                params.max_oracle_price_error
            );
            return err!(LaunchpadError::OracleDeviation);
        }

        Ok(OraclePrice {
            price,
            exponent: self.expo,
        })
    }

    pub fn from_test_oracle(oracle: &TestOracle) -> Result<Self> {
        Ok(Self {
            price: i64::try_from(oracle.price).map_err(|_| LaunchpadError::InvalidOraclePrice)?,
            conf: oracle.conf,
            expo: oracle.expo,
            publish_time: oracle.publish_time,
        })
    }

    /// Parse a Pyth PriceUpdateV2 account body
    pub fn from_pyth_price_update(data: &[u8]) -> Result<Self> {
        require!(
            data.len() >= PRICE_UPDATE_V2_MIN_LEN,
            LaunchpadError::InvalidOracleAccount
        );
        let base = match data[PYTH_VERIFICATION_LEVEL_OFF] {
            0 => PYTH_VERIFICATION_LEVEL_OFF + 2,
            1 => PYTH_VERIFICATION_LEVEL_OFF + 1,
            _ => return err!(LaunchpadError::InvalidOracleAccount),
        };
        let off_price = base + 32;
        let off_conf = off_price + 8;
        let off_expo = off_conf + 8;
        let off_publish_time = off_expo + 4;
        require!(
            off_publish_time + 8 <= data.len(),
            LaunchpadError::InvalidOracleAccount
        );

        Ok(Self {
            price: i64::from_le_bytes(read_bytes(data, off_price)?),
            conf: u64::from_le_bytes(read_bytes(data, off_conf)?),
            expo: i32::from_le_bytes(read_bytes(data, off_expo)?),
            publish_time: i64::from_le_bytes(read_bytes(data, off_publish_time)?),
        })
    }
}

fn read_bytes<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    data.get(offset..offset + N)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| LaunchpadError::InvalidOracleAccount.into())
}

impl OraclePrice {
    /// Load and validate the price behind `oracle_account`
    pub fn new_from_oracle(
        oracle_account: &AccountInfo,
        params: &OracleParams,
        now: i64,
    ) -> Result<Self> {
        require_keys_eq!(
            *oracle_account.key,
            params.oracle_account,
            LaunchpadError::InvalidOracleAccount
        );
        let feed = match params.oracle_type {
            OracleType::None => return err!(LaunchpadError::UnsupportedOracle),
            OracleType::Test => {
                require_keys_eq!(
                    *oracle_account.owner,
                    crate::ID,
                    LaunchpadError::InvalidOracleAccount
                );
                let data = oracle_account.try_borrow_data()?;
                let oracle = TestOracle::try_deserialize(&mut &data[..])?;
                OracleFeed::from_test_oracle(&oracle)?
            }
            OracleType::Pyth => {
                require_keys_eq!(
                    *oracle_account.owner,
                    PYTH_RECEIVER_PROGRAM_ID,
                    LaunchpadError::InvalidOracleAccount
                );
                let data = oracle_account.try_borrow_data()?;
                OracleFeed::from_pyth_price_update(&data)?
            }
        };
        feed.validate(params, now)
    }

    /// Re-express the price with a different exponent (truncating when precision is lost)
    pub fn scale_to_exponent(&self, target_exponent: i32) -> Result<Self> {
        if target_exponent == self.exponent {
            return Ok(*self);
        }
        let delta = target_exponent.safe_sub(self.exponent)?;
        let price = if delta > 0 {
            (self.price as u128).safe_div(checked_pow10(delta as u32)?)?
        } else {
            (self.price as u128).safe_mul(checked_pow10((-delta) as u32)?)?
        };
        Ok(Self {
            price: checked_as_u64(price)?,
            exponent: target_exponent,
        })
    }

    /// Convert `amount` base units of a token priced at `self` into base units
    /// of a token priced at `to_price`.
    pub fn convert_amount(
        &self,
        amount: u64,
        from_decimals: u8,
        to_price: &OraclePrice,
        to_decimals: u8,
    ) -> Result<u64> {
        if amount == 0 {
            return Ok(0);
        }
        require!(to_price.price > 0, LaunchpadError::InvalidOraclePrice);

        let mut numerator = (amount as u128)
            .safe_mul(self.price as u128)?
            .safe_mul(checked_pow10(to_decimals as u32)?)?;
        let mut denominator =
            (to_price.price as u128).safe_mul(checked_pow10(from_decimals as u32)?)?;

        let exponent_delta = self.exponent.safe_sub(to_price.exponent)?;
        if exponent_delta >= 0 {
            numerator = numerator.safe_mul(checked_pow10(exponent_delta as u32)?)?;
        } else {
            denominator = denominator.safe_mul(checked_pow10((-exponent_delta) as u32)?)?;
        }
        checked_as_u64(numerator.safe_div(denominator)?)
    }
}
