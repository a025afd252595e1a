use anchor_lang::prelude::*;

use crate::{constants::AUCTION_SEED, error::LaunchpadError, events::AuctionToggled, state::Auction};

#[derive(Accounts)]
pub struct DisableAuction<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ LaunchpadError::Unauthorized,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,
}

pub fn disable_auction(ctx: Context<DisableAuction>) -> Result<()> {
    let auction = &mut ctx.accounts.auction;
    auction.set_enabled(false);

    emit!(AuctionToggled {
        auction: auction.key(),
        enabled: false,
    });
    Ok(())
}
