use anchor_lang::prelude::*;

use crate::{constants::AUCTION_SEED, state::Auction};

#[derive(Accounts)]
pub struct GetAuctionPrice<'info> {
    #[account(
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,
}

/// Current unit price in pricing-custody base units
pub fn get_auction_price(ctx: Context<GetAuctionPrice>) -> Result<u64> {
    let auction = &ctx.accounts.auction;
    auction.current_price(auction.get_time()?)
}
