//! Token and lamport transfer utilities
//!
//! Helper functions for moving funds in and out of program-owned accounts.
//! Every program-owned token account is controlled by the transfer authority
//! PDA, so outgoing transfers sign with its seeds.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
#[allow(deprecated)]
use anchor_spl::token::{self, CloseAccount, InitializeAccount3, Transfer};

use crate::{constants::TRANSFER_AUTHORITY_SEED, error::LaunchpadError, utils::SafeMath};

/// Transfer tokens from a user account into a program-owned account
#[allow(deprecated)]
pub fn transfer_from_user<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let cpi_accounts = Transfer {
        from,
        to,
        authority,
    };
    let cpi_ctx = CpiContext::new(token_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)
}

/// Transfer tokens out of a program-owned account using the transfer authority
#[allow(deprecated)]
pub fn transfer_from_authority<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    transfer_authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let bump = [authority_bump];
    let seeds: &[&[u8]] = &[TRANSFER_AUTHORITY_SEED, &bump];
    let signer_seeds = [seeds];
    let cpi_accounts = Transfer {
        from,
        to,
        authority: transfer_authority,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, &signer_seeds);
    token::transfer(cpi_ctx, amount)
}

/// Move lamports from a user wallet to any account
pub fn transfer_sol_from_user<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    if lamports == 0 {
        return Ok(());
    }
    let cpi_ctx = CpiContext::new(system_program, system_program::Transfer { from, to });
    system_program::transfer(cpi_ctx, lamports)
}

/// Move lamports held by the transfer authority PDA. The authority is owned
/// by this program, so lamports are debited directly instead of through CPI.
pub fn transfer_sol_from_authority<'info>(
    transfer_authority: AccountInfo<'info>,
    to: AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    if lamports == 0 {
        return Ok(());
    }
    let remaining = transfer_authority
        .lamports()
        .checked_sub(lamports)
        .ok_or(LaunchpadError::InsufficientFees)?;
    let credited = to.lamports().safe_add(lamports)?;
    **transfer_authority.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}

/// Create a PDA token account owned by the transfer authority.
///
/// `account_seeds` are the seeds of the token account itself (including bump).
#[allow(clippy::too_many_arguments)]
pub fn create_authority_token_account<'info>(
    payer: AccountInfo<'info>,
    token_account: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    transfer_authority: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    account_seeds: &[&[u8]],
) -> Result<()> {
    let space = token::TokenAccount::LEN;
    let lamports = Rent::get()?.minimum_balance(space);
    let signer_seeds = [account_seeds];
    let create_ctx = CpiContext::new_with_signer(
        system_program,
        system_program::CreateAccount {
            from: payer,
            to: token_account.clone(),
        },
        &signer_seeds,
    );
    system_program::create_account(create_ctx, lamports, space as u64, token_program.key)?;

    let init_ctx = CpiContext::new(
        token_program,
        InitializeAccount3 {
            account: token_account,
            mint,
            authority: transfer_authority,
        },
    );
    token::initialize_account3(init_ctx)
}

/// Close an empty program-owned token account, returning rent to `destination`
pub fn close_authority_token_account<'info>(
    token_account: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    transfer_authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    authority_bump: u8,
) -> Result<()> {
    let bump = [authority_bump];
    let seeds: &[&[u8]] = &[TRANSFER_AUTHORITY_SEED, &bump];
    let signer_seeds = [seeds];
    let cpi_ctx = CpiContext::new_with_signer(
        token_program,
        CloseAccount {
            account: token_account,
            destination,
            authority: transfer_authority,
        },
        &signer_seeds,
    );
    token::close_account(cpi_ctx)
}
