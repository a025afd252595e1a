use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::AUCTION_SEED,
    error::LaunchpadError,
    events::TokensDeposited,
    state::Auction,
    utils::transfer_from_user,
};

#[derive(Accounts)]
#[instruction(params: AddTokensParams)]
pub struct AddTokens<'info> {
    pub owner: Signer<'info>,

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
        constraint = funding_account.mint == dispenser.mint @ LaunchpadError::InvalidTokenAccount,
        has_one = owner @ LaunchpadError::Unauthorized
    )]
    pub funding_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct AddTokensParams {
    pub token_index: u8,
    pub amount: u64,
}

/// Deposit auction inventory into a dispensing account
pub fn add_tokens(ctx: Context<AddTokens>, params: &AddTokensParams) -> Result<()> {
    require!(params.amount > 0, LaunchpadError::InvalidArgument);

    transfer_from_user(
        ctx.accounts.funding_account.to_account_info(),
        ctx.accounts.dispenser.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        params.amount,
    )?;

    emit!(TokensDeposited {
        auction: ctx.accounts.auction.key(),
        dispenser: ctx.accounts.dispenser.key(),
        amount: params.amount,
    });
    Ok(())
}
