use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{AUCTION_SEED, LAUNCHPAD_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::TokensWithdrawn,
    state::{Auction, Launchpad},
    utils::transfer_from_authority,
};

#[derive(Accounts)]
#[instruction(params: WithdrawTokensParams)]
pub struct WithdrawTokens<'info> {
    pub owner: Signer<'info>,

    /// CHECK: empty PDA, authority for token accounts
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        has_one = owner @ LaunchpadError::Unauthorized,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,

    #[account(
        mut,
        constraint = (params.token_index as usize) < auction.active_tokens().len()
            && dispenser.key() == auction.tokens[params.token_index as usize].account
            @ LaunchpadError::InvalidTokenAccount
    )]
    pub dispenser: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = receiving_account.mint == dispenser.mint @ LaunchpadError::InvalidTokenAccount
    )]
    pub receiving_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct WithdrawTokensParams {
    pub token_index: u8,
    pub amount: u64,
}

/// Return unsold inventory to the seller once the auction is stopped or over
pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, params: &WithdrawTokensParams) -> Result<()> {
    ctx.accounts.launchpad.check_withdrawals_allowed()?;

    let auction = &ctx.accounts.auction;
    let now = auction.get_time()?;
    require!(
        !auction.enabled || now > auction.common.end_time,
        LaunchpadError::AuctionStillActive
    );
    require!(
        params.amount <= ctx.accounts.dispenser.amount,
        LaunchpadError::InsufficientInventory
    );

    transfer_from_authority(
        ctx.accounts.dispenser.to_account_info(),
        ctx.accounts.receiving_account.to_account_info(),
        ctx.accounts.transfer_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.launchpad.transfer_authority_bump,
        params.amount,
    )?;

    emit!(TokensWithdrawn {
        auction: auction.key(),
        dispenser: ctx.accounts.dispenser.key(),
        amount: params.amount,
    });
    Ok(())
}
