//! Global constants for the launchpad program
//!
//! Centralized constants for PDA seeds and protocol parameters

// PDA seed constants
pub const MULTISIG_SEED: &[u8] = b"multisig";
pub const TRANSFER_AUTHORITY_SEED: &[u8] = b"transfer_authority";
pub const LAUNCHPAD_SEED: &[u8] = b"launchpad";
pub const CUSTODY_SEED: &[u8] = b"custody";
pub const CUSTODY_TOKEN_ACCOUNT_SEED: &[u8] = b"custody_token_account";
pub const TEST_ORACLE_SEED: &[u8] = b"test_oracle";
pub const AUCTION_SEED: &[u8] = b"auction";
pub const DISPENSE_SEED: &[u8] = b"dispense";
pub const BID_SEED: &[u8] = b"bid";
pub const SELLER_BALANCE_SEED: &[u8] = b"seller_balance";

// Multisig
pub const MAX_SIGNERS: usize = 6;

// Auction
pub const MAX_TOKENS: usize = 4;
/// Auction names double as PDA seeds, which are capped at 32 bytes
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_ABOUT_SELLER_LEN: usize = 256;
pub const MAX_SELLER_LINK_LEN: usize = 128;

// Fees
pub const DEFAULT_FEE_NUMERATOR: u64 = 1;
pub const DEFAULT_FEE_DENOMINATOR: u64 = 100;

// Math constants
pub const BPS_POWER: u64 = 10_000;
/// Fixed-point scale used by the exponential reprice function
pub const PRICE_SCALE: u128 = 1_000_000_000_000;
/// Largest decimal exponent accepted from an oracle feed
pub const MAX_ORACLE_EXPONENT: i32 = 18;
