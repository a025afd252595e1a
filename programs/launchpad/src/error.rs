//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // Initialization errors
    #[msg("Account is already initialized")]
    AlreadyInitialized,

    // Multisig errors
    #[msg("A different instruction is already pending approval")]
    AlreadyPending,

    #[msg("Signer is not one of the designated admin signers")]
    UnknownSigner,

    #[msg("Signer has already approved the pending instruction")]
    AlreadySigned,

    #[msg("Not enough approvals to execute the instruction")]
    ThresholdNotMet,

    // Fee errors
    #[msg("Fee fraction denominator must be greater than zero")]
    InvalidFraction,

    #[msg("Fee accumulator overflow")]
    FeeOverflow,

    // Oracle errors
    #[msg("Oracle price is stale")]
    OracleStale,

    #[msg("Oracle price confidence exceeds the allowed error")]
    OracleDeviation,

    #[msg("Not enough collected fees")]
    InsufficientFees,

    // Permission errors
    #[msg("New auctions are not allowed at this time")]
    NewAuctionsNotAllowed,

    #[msg("Auction updates are not allowed at this time")]
    AuctionUpdatesNotAllowed,

    #[msg("New bids are not allowed at this time")]
    NewBidsNotAllowed,

    #[msg("Withdrawals are not allowed at this time")]
    WithdrawalsNotAllowed,

    // Auction errors
    #[msg("Invalid ordering of auction times or price bounds")]
    InvalidOrdering,

    #[msg("Bid price is below the current auction price")]
    InvalidBid,

    #[msg("Auction is not updatable")]
    NotUpdatable,

    #[msg("Fill would exceed the per-address allocation cap")]
    CapExceeded,

    // Math errors
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid argument")]
    InvalidArgument,

    #[msg("Invalid admin signer set")]
    InvalidSignerSet,

    #[msg("No instruction is pending approval")]
    NoPendingInstruction,

    #[msg("Auction is disabled")]
    AuctionNotEnabled,

    #[msg("Auction is not accepting bids at this time")]
    AuctionNotActive,

    #[msg("Presale is reserved for whitelisted bidders")]
    PresaleWhitelistOnly,

    #[msg("Payment token is not accepted by this auction")]
    PaymentNotAccepted,

    #[msg("Oracle account does not match custody configuration")]
    InvalidOracleAccount,

    #[msg("Invalid oracle price")]
    InvalidOraclePrice,

    #[msg("Oracle type does not support this operation")]
    UnsupportedOracle,

    #[msg("Instruction is only available in test builds")]
    InvalidEnvironment,

    #[msg("No inventory available at the current price level")]
    InsufficientInventory,

    #[msg("Auction still holds undispensed tokens")]
    AuctionNotEmpty,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Not enough seller funds")]
    InsufficientFunds,

    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Auction is still running")]
    AuctionStillActive,
}
