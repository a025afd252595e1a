//! Launchpad configuration state
//!
//! Global singleton holding feature permissions, per-action fee fractions and
//! the lifetime fee accumulators. Mutated only through multisig-approved calls
//! (permissions, fees) and by the FeeLedger when actions are charged.

use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_FEE_DENOMINATOR, DEFAULT_FEE_NUMERATOR},
    error::LaunchpadError,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Permissions {
    pub allow_new_auctions: bool,
    pub allow_auction_updates: bool,
    pub allow_new_bids: bool,
    pub allow_withdrawals: bool,
}

impl Permissions {
    pub const LEN: usize = 4;

    pub fn all() -> Self {
        Self {
            allow_new_auctions: true,
            allow_auction_updates: true,
            allow_new_bids: true,
            allow_withdrawals: true,
        }
    }
}

/// Fee fraction `numerator / denominator` applied to an action amount
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Fee {
    pub numerator: u64,
    pub denominator: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Fees {
    pub new_auction: Fee,
    pub auction_update: Fee,
    pub invalid_bid: Fee,
    pub trade: Fee,
}

impl Fees {
    pub const LEN: usize = 4 * 16;

    pub fn uniform(fee: Fee) -> Self {
        Self {
            new_auction: fee,
            auction_update: fee,
            invalid_bid: fee,
            trade: fee,
        }
    }
}

/// Lifetime fee totals. Base-asset (lamports) for auction management,
/// quote-asset for bidding.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CollectedFees {
    pub new_auction_sol: u64,
    pub auction_update_sol: u64,
    pub invalid_bid_usdc: u64,
    pub trade_usdc: u64,
}

impl CollectedFees {
    pub const LEN: usize = 4 * 8;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeKind {
    NewAuction,
    AuctionUpdate,
    InvalidBid,
    Trade,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeAsset {
    /// Native lamports
    Base,
    /// Payment token held by a custody
    Quote,
}

impl FeeKind {
    pub fn asset(self) -> FeeAsset {
        match self {
            FeeKind::NewAuction | FeeKind::AuctionUpdate => FeeAsset::Base,
            FeeKind::InvalidBid | FeeKind::Trade => FeeAsset::Quote,
        }
    }
}

#[account]
#[derive(Default, Debug)]
pub struct Launchpad {
    pub permissions: Permissions,
    pub fees: Fees,
    pub collected_fees: CollectedFees,
    /// Auctions created so far; numbers auction instances
    pub auction_count: u64,
    pub transfer_authority_bump: u8,
    pub launchpad_bump: u8,
}

impl Launchpad {
    pub const LEN: usize = 8 + // discriminator
        Permissions::LEN +
        Fees::LEN +
        CollectedFees::LEN +
        8 + // auction_count
        1 + // transfer_authority_bump
        1; // launchpad_bump

    /// Every stored fee has a non-zero denominator once initialized
    pub fn is_initialized(&self) -> bool {
        self.fees.trade.denominator != 0
    }

    pub fn initialize(&mut self, transfer_authority_bump: u8, launchpad_bump: u8) -> Result<()> {
        require!(!self.is_initialized(), LaunchpadError::AlreadyInitialized);
        self.permissions = Permissions::all();
        self.fees = Fees::uniform(Fee {
            numerator: DEFAULT_FEE_NUMERATOR,
            denominator: DEFAULT_FEE_DENOMINATOR,
        });
        self.collected_fees = CollectedFees::default();
        self.auction_count = 0;
        self.transfer_authority_bump = transfer_authority_bump;
        self.launchpad_bump = launchpad_bump;
        Ok(())
    }

    pub fn set_permissions(&mut self, permissions: Permissions) {
        self.permissions = permissions;
    }

    pub fn set_fees(&mut self, fees: Fees) -> Result<()> {
        for fee in [fees.new_auction, fees.auction_update, fees.invalid_bid, fees.trade] {
            fee.validate()?;
        }
        self.fees = fees;
        Ok(())
    }

    pub fn fee(&self, kind: FeeKind) -> Fee {
        match kind {
            FeeKind::NewAuction => self.fees.new_auction,
            FeeKind::AuctionUpdate => self.fees.auction_update,
            FeeKind::InvalidBid => self.fees.invalid_bid,
            FeeKind::Trade => self.fees.trade,
        }
    }

    pub fn collected_mut(&mut self, kind: FeeKind) -> &mut u64 {
        match kind {
            FeeKind::NewAuction => &mut self.collected_fees.new_auction_sol,
            FeeKind::AuctionUpdate => &mut self.collected_fees.auction_update_sol,
            FeeKind::InvalidBid => &mut self.collected_fees.invalid_bid_usdc,
            FeeKind::Trade => &mut self.collected_fees.trade_usdc,
        }
    }

    /// Hand out the instance number for a new auction
    pub fn next_auction_instance(&mut self) -> Result<u64> {
        let instance = self.auction_count;
        self.auction_count = instance.checked_add(1).ok_or(LaunchpadError::MathOverflow)?;
        Ok(instance)
    }

    pub fn check_new_auctions_allowed(&self) -> Result<()> {
        require!(
            self.permissions.allow_new_auctions,
            LaunchpadError::NewAuctionsNotAllowed
        );
        Ok(())
    }

    pub fn check_withdrawals_allowed(&self) -> Result<()> {
        require!(
            self.permissions.allow_withdrawals,
            LaunchpadError::WithdrawalsNotAllowed
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_defaults() {
        let mut launchpad = Launchpad::default();
        launchpad.initialize(254, 253).unwrap();
        assert_eq!(launchpad.permissions, Permissions::all());
        assert_eq!(launchpad.fees.invalid_bid, Fee { numerator: 1, denominator: 100 });
        assert_eq!(launchpad.collected_fees, CollectedFees::default());
        assert_eq!(launchpad.transfer_authority_bump, 254);
        assert_eq!(launchpad.launchpad_bump, 253);
    }

    #[test]
    fn test_auction_instances_are_sequential() {
        let mut launchpad = Launchpad::default();
        launchpad.initialize(254, 253).unwrap();
        assert_eq!(launchpad.next_auction_instance().unwrap(), 0);
        assert_eq!(launchpad.next_auction_instance().unwrap(), 1);
        assert_eq!(launchpad.auction_count, 2);

        launchpad.auction_count = u64::MAX;
        assert!(launchpad.next_auction_instance().is_err());
        assert_eq!(launchpad.auction_count, u64::MAX);
    }

    #[test]
    fn test_fee_kinds_split_by_asset() {
        assert_eq!(FeeKind::NewAuction.asset(), FeeAsset::Base);
        assert_eq!(FeeKind::AuctionUpdate.asset(), FeeAsset::Base);
        assert_eq!(FeeKind::InvalidBid.asset(), FeeAsset::Quote);
        assert_eq!(FeeKind::Trade.asset(), FeeAsset::Quote);
    }
}
