use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{CUSTODY_SEED, LAUNCHPAD_SEED, MULTISIG_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::FeesWithdrawn,
    state::{AdminInstruction, Custody, Launchpad, Multisig},
    utils::transfer_from_authority,
};

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    /// CHECK: empty PDA, authority for token accounts
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        mut,
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
        constraint = receiving_account.mint == custody.mint @ LaunchpadError::InvalidTokenAccount
    )]
    pub receiving_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct WithdrawFeesParams {
    pub amount: u64,
}

/// Withdraw accumulated quote-asset fees from a custody vault
pub fn withdraw_fees<'info>(
    ctx: Context<'_, '_, '_, 'info, WithdrawFees<'info>>,
    params: &WithdrawFeesParams,
) -> Result<u8> {
    require!(
        params.amount <= ctx.accounts.custody.collected_fees,
        LaunchpadError::InsufficientFees
    );

    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::WithdrawFees,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    ctx.accounts.custody.withdraw_fees(params.amount)?;
    transfer_from_authority(
        ctx.accounts.custody_token_account.to_account_info(),
        ctx.accounts.receiving_account.to_account_info(),
        ctx.accounts.transfer_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.launchpad.transfer_authority_bump,
        params.amount,
    )?;

    msg!(
        "Withdrew {} fees, {} remaining",
        params.amount,
        ctx.accounts.custody.collected_fees
    );
    emit!(FeesWithdrawn {
        custody: ctx.accounts.custody.key(),
        amount: params.amount,
        receiver: ctx.accounts.receiving_account.key(),
    });
    Ok(0)
}
