use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{CUSTODY_SEED, LAUNCHPAD_SEED, SELLER_BALANCE_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::FundsWithdrawn,
    state::{Custody, Launchpad, SellerBalance},
    utils::transfer_from_authority,
};

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    pub owner: Signer<'info>,

    /// CHECK: empty PDA, authority for token accounts
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        seeds = [CUSTODY_SEED, custody.mint.as_ref()],
        bump = custody.bump
    )]
    pub custody: Box<Account<'info, Custody>>,

    #[account(
        mut,
        constraint = custody_token_account.key() == custody.token_account @ LaunchpadError::InvalidTokenAccount
    )]
    pub custody_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        has_one = owner @ LaunchpadError::Unauthorized,
        has_one = custody @ LaunchpadError::InvalidArgument,
        seeds = [SELLER_BALANCE_SEED, owner.key().as_ref(), custody.key().as_ref()],
        bump = seller_balance.bump
    )]
    pub seller_balance: Box<Account<'info, SellerBalance>>,

    #[account(
        mut,
        constraint = receiving_account.mint == custody.mint @ LaunchpadError::InvalidTokenAccount
    )]
    pub receiving_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct WithdrawFundsParams {
    pub amount: u64,
}

/// Withdraw sale proceeds credited to the seller in one payment custody
pub fn withdraw_funds(ctx: Context<WithdrawFunds>, params: &WithdrawFundsParams) -> Result<()> {
    ctx.accounts.launchpad.check_withdrawals_allowed()?;
    ctx.accounts.seller_balance.withdraw(params.amount)?;

    transfer_from_authority(
        ctx.accounts.custody_token_account.to_account_info(),
        ctx.accounts.receiving_account.to_account_info(),
        ctx.accounts.transfer_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.launchpad.transfer_authority_bump,
        params.amount,
    )?;

    emit!(FundsWithdrawn {
        owner: ctx.accounts.owner.key(),
        custody: ctx.accounts.custody.key(),
        amount: params.amount,
    });
    Ok(())
}
