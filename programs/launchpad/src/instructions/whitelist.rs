//! Presale whitelist management
//!
//! The whitelist flag lives on the bidder's `Bid` record for the auction, so
//! adding a bidder creates the record ahead of their first bid.

use anchor_lang::prelude::*;

use crate::{
    constants::{AUCTION_SEED, BID_SEED},
    error::LaunchpadError,
    events::WhitelistChanged,
    state::{Auction, Bid},
};

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct WhitelistParams {
    pub bidder: Pubkey,
}

#[derive(Accounts)]
#[instruction(params: WhitelistParams)]
pub struct WhitelistAdd<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        has_one = owner @ LaunchpadError::Unauthorized,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = Bid::LEN,
        seeds = [BID_SEED, params.bidder.as_ref(), auction.key().as_ref()],
        bump
    )]
    pub bid: Box<Account<'info, Bid>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(params: WhitelistParams)]
pub struct WhitelistRemove<'info> {
    pub owner: Signer<'info>,

    #[account(
        has_one = owner @ LaunchpadError::Unauthorized,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,

    #[account(
        mut,
        seeds = [BID_SEED, params.bidder.as_ref(), auction.key().as_ref()],
        bump = bid.bump
    )]
    pub bid: Box<Account<'info, Bid>>,
}

pub fn whitelist_add(ctx: Context<WhitelistAdd>, params: &WhitelistParams) -> Result<()> {
    let auction = ctx.accounts.auction.key();
    let instance = ctx.accounts.auction.instance;
    let bid = &mut ctx.accounts.bid;
    bid.bind(params.bidder, auction, instance, ctx.bumps.bid)?;
    bid.whitelisted = true;

    emit!(WhitelistChanged {
        auction,
        bidder: params.bidder,
        whitelisted: true,
    });
    Ok(())
}

pub fn whitelist_remove(ctx: Context<WhitelistRemove>, params: &WhitelistParams) -> Result<()> {
    let auction = ctx.accounts.auction.key();
    let instance = ctx.accounts.auction.instance;
    let bid = &mut ctx.accounts.bid;
    let bump = bid.bump;
    bid.bind(params.bidder, auction, instance, bump)?;
    bid.whitelisted = false;

    emit!(WhitelistChanged {
        auction,
        bidder: params.bidder,
        whitelisted: false,
    });
    Ok(())
}
