//! Initialize the launchpad
//!
//! Creates the multisig, the transfer authority PDA and the launchpad config
//! in one call. Only the program upgrade authority may run it; the admin
//! signers are passed as remaining accounts.

use anchor_lang::prelude::*;

use crate::{
    constants::{LAUNCHPAD_SEED, MULTISIG_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::LaunchpadInitialized,
    program::Launchpad as LaunchpadProgram,
    state::{Launchpad, Multisig},
};

#[derive(Accounts)]
pub struct Init<'info> {
    #[account(mut)]
    pub upgrade_authority: Signer<'info>,

    #[account(
        init,
        payer = upgrade_authority,
        space = Multisig::LEN,
        seeds = [MULTISIG_SEED],
        bump
    )]
    pub multisig: Box<Account<'info, Multisig>>,

    /// CHECK: empty PDA, authority for every program-owned token account
    #[account(
        init,
        payer = upgrade_authority,
        space = 0,
        seeds = [TRANSFER_AUTHORITY_SEED],
        bump
    )]
    pub transfer_authority: AccountInfo<'info>,

    #[account(
        init,
        payer = upgrade_authority,
        space = Launchpad::LEN,
        seeds = [LAUNCHPAD_SEED],
        bump
    )]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        constraint = launchpad_program.programdata_address()? == Some(launchpad_program_data.key())
    )]
    pub launchpad_program: Program<'info, LaunchpadProgram>,

    #[account(
        constraint = launchpad_program_data.upgrade_authority_address == Some(upgrade_authority.key())
            @ LaunchpadError::Unauthorized
    )]
    pub launchpad_program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
    // remaining accounts: 1 to MAX_SIGNERS admin signer accounts
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct InitParams {
    /// Approvals required to execute an admin instruction
    pub min_signatures: u8,
}

pub fn init<'info>(
    ctx: Context<'_, '_, '_, 'info, Init<'info>>,
    params: &InitParams,
) -> Result<()> {
    let signers: Vec<Pubkey> = ctx.remaining_accounts.iter().map(|a| a.key()).collect();

    let multisig = &mut ctx.accounts.multisig;
    multisig.initialize(&signers, params.min_signatures, ctx.bumps.multisig)?;

    let launchpad = &mut ctx.accounts.launchpad;
    launchpad.initialize(ctx.bumps.transfer_authority, ctx.bumps.launchpad)?;

    msg!(
        "Launchpad initialized with {} signers, {} required",
        signers.len(),
        params.min_signatures
    );

    emit!(LaunchpadInitialized {
        num_signers: multisig.num_signers,
        min_signatures: multisig.min_signatures,
    });

    Ok(())
}
