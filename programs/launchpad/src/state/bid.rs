//! Per-bidder record
//!
//! Tracks how much a bidder has filled in one auction (for the per-address
//! caps) and whether the seller whitelisted them for the presale tier. The
//! record is keyed by auction address, which a deleted auction's name can
//! reuse, so it also remembers which auction instance it was filled against.

use anchor_lang::prelude::*;

use crate::error::LaunchpadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidderTier {
    Whitelisted,
    Regular,
}

#[account]
#[derive(Default, Debug)]
pub struct Bid {
    pub owner: Pubkey,
    pub auction: Pubkey,
    pub auction_instance: u64,
    pub whitelisted: bool,
    pub filled: u64,
    pub last_fill_time: i64,
    pub bump: u8,
}

impl Bid {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // auction
        8 + // auction_instance
        1 + // whitelisted
        8 + // filled
        8 + // last_fill_time
        1; // bump

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Bind a freshly created record; a bound record must belong to the same
    /// pair. A record left over from an earlier auction instance at the same
    /// address starts over.
    pub fn bind(
        &mut self,
        owner: Pubkey,
        auction: Pubkey,
        auction_instance: u64,
        bump: u8,
    ) -> Result<()> {
        if self.is_initialized() {
            require_keys_eq!(self.owner, owner, LaunchpadError::Unauthorized);
            require_keys_eq!(self.auction, auction, LaunchpadError::Unauthorized);
            if self.auction_instance != auction_instance {
                self.reset(auction_instance);
            }
            return Ok(());
        }
        self.owner = owner;
        self.auction = auction;
        self.reset(auction_instance);
        self.bump = bump;
        Ok(())
    }

    fn reset(&mut self, auction_instance: u64) {
        self.auction_instance = auction_instance;
        self.whitelisted = false;
        self.filled = 0;
        self.last_fill_time = 0;
    }

    pub fn tier(&self) -> BidderTier {
        if self.whitelisted {
            BidderTier::Whitelisted
        } else {
            BidderTier::Regular
        }
    }
}
