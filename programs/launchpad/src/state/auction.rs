//! Auction state
//!
//! One record per auction: metadata, payment policy, pricing configuration,
//! up to four dispensed tokens and per-tier trade statistics. The bidding
//! state machine lives here; payment conversion and fee routing are applied
//! by the instruction handler around it.

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::native_mint;

use crate::{
    constants::*,
    error::LaunchpadError,
    logic::pricing,
    state::{Bid, BidderTier, FeeKind, Permissions},
    utils::SafeMath,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum PricingModel {
    #[default]
    Fixed,
    DynamicDutchAuction,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum RepriceFunction {
    #[default]
    Linear,
    /// tick_size is interpreted in BPS
    Exponential,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum AmountFunction {
    #[default]
    Fixed,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct CommonParams {
    pub name: String,
    pub description: String,
    pub about_seller: String,
    pub seller_link: String,
    pub start_time: i64,
    pub end_time: i64,
    pub presale_start_time: i64,
    pub presale_end_time: i64,
    pub fill_limit_reg_address: u64,
    pub fill_limit_wl_address: u64,
}

impl CommonParams {
    pub const LEN: usize = 4 + MAX_NAME_LEN +
        4 + MAX_DESCRIPTION_LEN +
        4 + MAX_ABOUT_SELLER_LEN +
        4 + MAX_SELLER_LINK_LEN +
        8 * 4 + // times
        8 * 2; // fill limits
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PaymentParams {
    pub accept_sol: bool,
    pub accept_usdc: bool,
    pub accept_other_tokens: bool,
}

impl PaymentParams {
    pub const LEN: usize = 3;

    pub fn accepts(&self, channel: PaymentChannel) -> bool {
        match channel {
            PaymentChannel::Sol => self.accept_sol,
            PaymentChannel::Usdc => self.accept_usdc,
            PaymentChannel::OtherToken => self.accept_other_tokens,
        }
    }
}

/// How a bid is paid, derived from the custody receiving the payment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentChannel {
    /// Wrapped SOL
    Sol,
    /// The token the auction is priced in
    Usdc,
    /// Any other registered custody, converted through both oracles
    OtherToken,
}

impl PaymentChannel {
    pub fn classify(payment_mint: &Pubkey, payment_custody: &Pubkey, pricing_custody: &Pubkey) -> Self {
        if *payment_mint == native_mint::ID {
            PaymentChannel::Sol
        } else if payment_custody == pricing_custody {
            PaymentChannel::Usdc
        } else {
            PaymentChannel::OtherToken
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PricingParams {
    /// Custody whose token denominates the auction price
    pub custody: Pubkey,
    pub pricing_model: PricingModel,
    pub start_price: u64,
    pub max_price: u64,
    pub min_price: u64,
    pub reprice_delay: i64,
    pub reprice_function: RepriceFunction,
    pub amount_function: AmountFunction,
    pub amount_per_level: u64,
    pub tick_size: u64,
}

impl PricingParams {
    pub const LEN: usize = 32 + 1 + 8 * 3 + 8 + 1 + 1 + 8 + 8;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct AuctionToken {
    /// Units of this token dispensed per unit of auction inventory
    pub ratio: u64,
    pub account: Pubkey,
}

impl AuctionToken {
    pub const LEN: usize = 8 + 32;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BidderStats {
    pub fills_volume: u64,
    pub weighted_fills_sum: u64,
    pub min_fill_price: u64,
    pub max_fill_price: u64,
    pub num_trades: u64,
}

impl Default for BidderStats {
    /// `u64::MAX` as min fill price means no trade yet
    fn default() -> Self {
        Self {
            fills_volume: 0,
            weighted_fills_sum: 0,
            min_fill_price: u64::MAX,
            max_fill_price: 0,
            num_trades: 0,
        }
    }
}

impl BidderStats {
    pub const LEN: usize = 8 * 5;

    fn with_fill(&self, amount: u64, price: u64) -> Result<Self> {
        Ok(Self {
            fills_volume: self.fills_volume.safe_add(amount)?,
            weighted_fills_sum: self.weighted_fills_sum.safe_add(amount.safe_mul(price)?)?,
            min_fill_price: self.min_fill_price.min(price),
            max_fill_price: self.max_fill_price.max(price),
            num_trades: self.num_trades.safe_add(1)?,
        })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct AuctionStats {
    pub first_trade_time: i64,
    pub last_trade_time: i64,
    pub last_amount: u64,
    pub last_price: u64,
    pub wl_bidders: BidderStats,
    pub reg_bidders: BidderStats,
}

impl AuctionStats {
    pub const LEN: usize = 8 * 4 + BidderStats::LEN * 2;
}

/// Result of evaluating a bid against the auction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidOutcome {
    /// `amount` units filled at `price`
    Filled { amount: u64, price: u64 },
    /// Current price exceeds the bidder's limit; only the invalid-bid fee applies
    Rejected { price: u64 },
}

impl BidOutcome {
    /// Fee kind and fee base, in pricing-custody units, for a bid of
    /// `requested` units. A fill pays the trade fee on its cost; a rejected
    /// bid pays the invalid-bid fee on what the request costs at the current
    /// price, so a low limit price does not shrink it.
    pub fn fee_base(&self, requested: u64) -> Result<(FeeKind, u64)> {
        match *self {
            BidOutcome::Filled { amount, price } => Ok((FeeKind::Trade, amount.safe_mul(price)?)),
            BidOutcome::Rejected { price } => Ok((FeeKind::InvalidBid, requested.safe_mul(price)?)),
        }
    }
}

#[account]
#[derive(Default, Debug)]
pub struct Auction {
    pub owner: Pubkey,
    /// Distinguishes auctions that reuse the address of a deleted one
    pub instance: u64,
    pub enabled: bool,
    pub updatable: bool,
    pub common: CommonParams,
    pub payment: PaymentParams,
    pub pricing: PricingParams,
    pub stats: AuctionStats,
    pub tokens: [AuctionToken; MAX_TOKENS],
    pub num_tokens: u8,
    pub creation_time: i64,
    pub update_time: i64,
    pub bump: u8,
}

impl Auction {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8 + // instance
        1 + // enabled
        1 + // updatable
        CommonParams::LEN +
        PaymentParams::LEN +
        PricingParams::LEN +
        AuctionStats::LEN +
        AuctionToken::LEN * MAX_TOKENS +
        1 + // num_tokens
        8 + // creation_time
        8 + // update_time
        1; // bump

    /// Reject inconsistent metadata, time windows or price bounds
    pub fn validate_params(
        common: &CommonParams,
        pricing: &PricingParams,
        token_ratios: &[u64],
        num_tokens: usize,
    ) -> Result<()> {
        require!(
            !common.name.is_empty() && common.name.len() <= MAX_NAME_LEN,
            LaunchpadError::InvalidArgument
        );
        require!(
            common.description.len() <= MAX_DESCRIPTION_LEN
                && common.about_seller.len() <= MAX_ABOUT_SELLER_LEN
                && common.seller_link.len() <= MAX_SELLER_LINK_LEN,
            LaunchpadError::InvalidArgument
        );
        require!(
            common.presale_start_time <= common.presale_end_time
                && common.presale_end_time <= common.start_time
                && common.start_time <= common.end_time,
            LaunchpadError::InvalidOrdering
        );
        require!(
            pricing.min_price <= pricing.start_price && pricing.start_price <= pricing.max_price,
            LaunchpadError::InvalidOrdering
        );
        require!(
            token_ratios.len() <= MAX_TOKENS && token_ratios.len() >= num_tokens,
            LaunchpadError::InvalidArgument
        );
        require!(
            token_ratios[..num_tokens].iter().all(|ratio| *ratio > 0),
            LaunchpadError::InvalidArgument
        );

        if pricing.pricing_model == PricingModel::DynamicDutchAuction {
            require!(
                pricing.reprice_delay > 0 && pricing.amount_per_level > 0 && pricing.tick_size > 0,
                LaunchpadError::InvalidArgument
            );
            if pricing.reprice_function == RepriceFunction::Exponential {
                require!(pricing.tick_size < BPS_POWER, LaunchpadError::InvalidArgument);
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        enabled: bool,
        updatable: bool,
        common: CommonParams,
        payment: PaymentParams,
        pricing: PricingParams,
        token_ratios: &[u64],
        creation_time: i64,
        bump: u8,
    ) -> Result<()> {
        Self::validate_params(&common, &pricing, token_ratios, 0)?;
        self.owner = owner;
        self.enabled = enabled;
        self.updatable = updatable;
        self.common = common;
        self.payment = payment;
        self.pricing = pricing;
        self.stats = AuctionStats::default();
        self.tokens = [AuctionToken::default(); MAX_TOKENS];
        self.num_tokens = 0;
        self.creation_time = creation_time;
        self.update_time = creation_time;
        self.bump = bump;
        Ok(())
    }

    /// Bind the next token slot to a dispensing account
    pub fn add_token(&mut self, account: Pubkey, ratio: u64) -> Result<()> {
        require!(
            (self.num_tokens as usize) < MAX_TOKENS,
            LaunchpadError::InvalidArgument
        );
        require!(ratio > 0, LaunchpadError::InvalidArgument);
        self.tokens[self.num_tokens as usize] = AuctionToken { ratio, account };
        self.num_tokens += 1;
        Ok(())
    }

    pub fn active_tokens(&self) -> &[AuctionToken] {
        &self.tokens[..self.num_tokens as usize]
    }

    /// Apply an update. Checks `updatable` before anything else, so a frozen
    /// auction reports `NotUpdatable` regardless of launchpad permissions.
    pub fn update(
        &mut self,
        permissions: &Permissions,
        common: CommonParams,
        payment: PaymentParams,
        pricing: PricingParams,
        token_ratios: &[u64],
        now: i64,
    ) -> Result<()> {
        require!(self.updatable, LaunchpadError::NotUpdatable);
        require!(
            permissions.allow_auction_updates,
            LaunchpadError::AuctionUpdatesNotAllowed
        );
        let num_tokens = self.num_tokens as usize;
        Self::validate_params(&common, &pricing, token_ratios, num_tokens)?;
        require!(common.name == self.common.name, LaunchpadError::InvalidArgument);

        self.common = common;
        self.payment = payment;
        self.pricing = pricing;
        for (token, ratio) in self.tokens[..num_tokens].iter_mut().zip(token_ratios) {
            token.ratio = *ratio;
        }
        self.update_time = now;
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Auction clock. Test builds read the injected time from `creation_time`.
    pub fn get_time(&self) -> Result<i64> {
        if cfg!(feature = "test") {
            Ok(self.creation_time)
        } else {
            Ok(Clock::get()?.unix_timestamp)
        }
    }

    pub fn set_test_time(&mut self, time: i64) -> Result<()> {
        require!(cfg!(feature = "test"), LaunchpadError::InvalidEnvironment);
        self.creation_time = time;
        Ok(())
    }

    pub fn total_fills(&self) -> Result<u64> {
        self.stats
            .wl_bidders
            .fills_volume
            .safe_add(self.stats.reg_bidders.fills_volume)
    }

    pub fn current_price(&self, now: i64) -> Result<u64> {
        pricing::current_price(&self.pricing, self.common.start_time, self.total_fills()?, now)
    }

    pub fn amount_available(&self) -> Result<u64> {
        Ok(pricing::amount_available(&self.pricing, self.total_fills()?))
    }

    pub fn fill_limit(&self, tier: BidderTier) -> u64 {
        match tier {
            BidderTier::Whitelisted => self.common.fill_limit_wl_address,
            BidderTier::Regular => self.common.fill_limit_reg_address,
        }
    }

    /// Whitelisted bidders may trade in `[presale_start, presale_end)` and
    /// everyone in `[start, end]`.
    pub fn check_bid_window(&self, tier: BidderTier, now: i64) -> Result<()> {
        let common = &self.common;
        require!(
            now >= common.presale_start_time && now <= common.end_time,
            LaunchpadError::AuctionNotActive
        );
        if now >= common.start_time {
            return Ok(());
        }
        require!(now < common.presale_end_time, LaunchpadError::AuctionNotActive);
        require!(
            tier == BidderTier::Whitelisted,
            LaunchpadError::PresaleWhitelistOnly
        );
        Ok(())
    }

    /// Evaluate and, when the price is acceptable, commit a bid. All checks
    /// run before any write; a rejected bid leaves the records untouched.
    pub fn place_bid(
        &mut self,
        bid: &mut Bid,
        permissions: &Permissions,
        amount: u64,
        max_price: u64,
        now: i64,
    ) -> Result<BidOutcome> {
        require!(permissions.allow_new_bids, LaunchpadError::NewBidsNotAllowed);
        require!(self.enabled, LaunchpadError::AuctionNotEnabled);
        require!(amount > 0, LaunchpadError::InvalidArgument);
        let tier = bid.tier();
        self.check_bid_window(tier, now)?;

        let filled_after = bid.filled.safe_add(amount)?;
        if filled_after > self.fill_limit(tier) {
            msg!(
                "Fill cap exceeded: filled {}, requested {}, limit {}",
                bid.filled,
                amount,
                self.fill_limit(tier)
            );
            return err!(LaunchpadError::CapExceeded);
        }

        let price = self.current_price(now)?;
        if price > max_price {
            return Ok(BidOutcome::Rejected { price });
        }

        let fill_amount = amount.min(self.amount_available()?);
        require!(fill_amount > 0, LaunchpadError::InsufficientInventory);

        let tier_stats = match tier {
            BidderTier::Whitelisted => self.stats.wl_bidders,
            BidderTier::Regular => self.stats.reg_bidders,
        }
        .with_fill(fill_amount, price)?;
        let bid_filled = bid.filled.safe_add(fill_amount)?;
        let first_trade =
            self.stats.wl_bidders.num_trades == 0 && self.stats.reg_bidders.num_trades == 0;

        match tier {
            BidderTier::Whitelisted => self.stats.wl_bidders = tier_stats,
            BidderTier::Regular => self.stats.reg_bidders = tier_stats,
        }
        if first_trade {
            self.stats.first_trade_time = now;
        }
        self.stats.last_trade_time = now;
        self.stats.last_amount = fill_amount;
        self.stats.last_price = price;

        bid.filled = bid_filled;
        bid.last_fill_time = now;

        Ok(BidOutcome::Filled {
            amount: fill_amount,
            price,
        })
    }
}
