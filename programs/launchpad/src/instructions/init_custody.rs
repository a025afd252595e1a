//! Register a token custody
//!
//! Creates the custody record and its vault token account. The record uses
//! `init_if_needed` so every co-signer can submit the identical call while
//! the multisig collects approvals; only the executing call binds it.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{CUSTODY_SEED, CUSTODY_TOKEN_ACCOUNT_SEED, LAUNCHPAD_SEED, MULTISIG_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::CustodyInitialized,
    state::{AdminInstruction, Custody, Launchpad, Multisig, OracleParams},
};

#[derive(Accounts)]
pub struct InitCustody<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    /// CHECK: empty PDA, authority for token accounts
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    pub custody_token_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = admin,
        space = Custody::LEN,
        seeds = [CUSTODY_SEED, custody_token_mint.key().as_ref()],
        bump
    )]
    pub custody: Box<Account<'info, Custody>>,

    #[account(
        init_if_needed,
        payer = admin,
        token::mint = custody_token_mint,
        token::authority = transfer_authority,
        seeds = [CUSTODY_TOKEN_ACCOUNT_SEED, custody_token_mint.key().as_ref()],
        bump
    )]
    pub custody_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub type InitCustodyParams = OracleParams;

pub fn init_custody<'info>(
    ctx: Context<'_, '_, '_, 'info, InitCustody<'info>>,
    params: &InitCustodyParams,
) -> Result<u8> {
    require!(
        !ctx.accounts.custody.is_initialized(),
        LaunchpadError::AlreadyInitialized
    );

    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::InitCustody,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    let token_account = ctx.accounts.custody_token_account.key();
    let mint = ctx.accounts.custody_token_mint.key();
    let decimals = ctx.accounts.custody_token_mint.decimals;
    let custody = &mut ctx.accounts.custody;
    custody.initialize(token_account, mint, decimals, params, ctx.bumps.custody)?;

    msg!(
        "Custody for mint {} initialized, oracle {:?} at {}",
        mint,
        params.oracle_type,
        params.oracle_account
    );
    emit!(CustodyInitialized {
        custody: custody.key(),
        mint,
        decimals,
    });
    Ok(0)
}
