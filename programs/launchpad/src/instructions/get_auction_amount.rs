use anchor_lang::prelude::*;

use crate::{constants::AUCTION_SEED, state::Auction};

#[derive(Accounts)]
pub struct GetAuctionAmount<'info> {
    #[account(
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,
}

/// Inventory still fillable at the current price level
pub fn get_auction_amount(ctx: Context<GetAuctionAmount>) -> Result<u64> {
    ctx.accounts.auction.amount_available()
}
