//! Event definitions

use anchor_lang::prelude::*;

/// Event emitted once the launchpad singleton and multisig are created
#[event]
pub struct LaunchpadInitialized {
    pub num_signers: u8,
    pub min_signatures: u8,
}

/// Event emitted for every approval that does not yet reach quorum
#[event]
pub struct MultisigApproved {
    pub signer: Pubkey,
    pub instruction_hash: u64,
    pub signatures_left: u8,
}

#[event]
pub struct MultisigExecuted {
    pub signer: Pubkey,
    pub instruction: u8,
}

#[event]
pub struct MultisigCancelled {
    pub signer: Pubkey,
    pub instruction_hash: u64,
}

#[event]
pub struct FeesUpdated {
    pub new_auction: [u64; 2],
    pub auction_update: [u64; 2],
    pub invalid_bid: [u64; 2],
    pub trade: [u64; 2],
}

#[event]
pub struct PermissionsUpdated {
    pub allow_new_auctions: bool,
    pub allow_auction_updates: bool,
    pub allow_new_bids: bool,
    pub allow_withdrawals: bool,
}

#[event]
pub struct CustodyInitialized {
    pub custody: Pubkey,
    pub mint: Pubkey,
    pub decimals: u8,
}

#[event]
pub struct OracleConfigUpdated {
    pub custody: Pubkey,
    pub oracle_account: Pubkey,
    pub max_oracle_price_error: u32,
    pub max_oracle_price_age_sec: u32,
}

#[event]
pub struct AuctionCreated {
    pub auction: Pubkey,
    pub owner: Pubkey,
    pub num_tokens: u8,
    pub fee_lamports: u64,
}

#[event]
pub struct AuctionUpdated {
    pub auction: Pubkey,
    pub fee_lamports: u64,
    pub update_time: i64,
}

#[event]
pub struct AuctionToggled {
    pub auction: Pubkey,
    pub enabled: bool,
}

#[event]
pub struct AuctionDeleted {
    pub auction: Pubkey,
    pub owner: Pubkey,
}

/// Event emitted when a bid is filled
#[event]
pub struct BidFilled {
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub whitelisted: bool,
    pub amount: u64,
    pub price: u64,
    pub payment_custody: Pubkey,
    pub payment_amount: u64,
    pub fee_amount: u64,
    pub timestamp: i64,
}

/// Event emitted when a bid is priced out; the invalid-bid fee is still charged
#[event]
pub struct BidRejected {
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub error_code: u32,
    pub price: u64,
    pub max_price: u64,
    pub fee_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeesWithdrawn {
    pub custody: Pubkey,
    pub amount: u64,
    pub receiver: Pubkey,
}

#[event]
pub struct FundsWithdrawn {
    pub owner: Pubkey,
    pub custody: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensDeposited {
    pub auction: Pubkey,
    pub dispenser: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensWithdrawn {
    pub auction: Pubkey,
    pub dispenser: Pubkey,
    pub amount: u64,
}

#[event]
pub struct WhitelistChanged {
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub whitelisted: bool,
}
