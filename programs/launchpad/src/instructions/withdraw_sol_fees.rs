use anchor_lang::prelude::*;

use crate::{
    constants::{LAUNCHPAD_SEED, MULTISIG_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::FeesWithdrawn,
    state::{AdminInstruction, Launchpad, Multisig},
    utils::transfer_sol_from_authority,
};

#[derive(Accounts)]
pub struct WithdrawSolFees<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    /// CHECK: empty PDA, holds base-asset fees
    #[account(mut, seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(mut)]
    pub receiver: SystemAccount<'info>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct WithdrawSolFeesParams {
    pub amount: u64,
}

/// Withdraw lamport fees held by the transfer authority, keeping it rent exempt
pub fn withdraw_sol_fees<'info>(
    ctx: Context<'_, '_, '_, 'info, WithdrawSolFees<'info>>,
    params: &WithdrawSolFeesParams,
) -> Result<u8> {
    let reserve = Rent::get()?.minimum_balance(0);
    let available = ctx
        .accounts
        .transfer_authority
        .lamports()
        .saturating_sub(reserve);
    require!(params.amount <= available, LaunchpadError::InsufficientFees);

    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::WithdrawSolFees,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    transfer_sol_from_authority(
        ctx.accounts.transfer_authority.to_account_info(),
        ctx.accounts.receiver.to_account_info(),
        params.amount,
    )?;

    emit!(FeesWithdrawn {
        custody: ctx.accounts.transfer_authority.key(),
        amount: params.amount,
        receiver: ctx.accounts.receiver.key(),
    });
    Ok(0)
}
