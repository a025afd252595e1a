use anchor_lang::prelude::*;

use crate::{constants::MULTISIG_SEED, events::MultisigCancelled, state::Multisig};

#[derive(Accounts)]
pub struct CancelMultisig<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,
}

/// Drop the pending admin instruction so a different one can be proposed
pub fn cancel_multisig(ctx: Context<CancelMultisig>) -> Result<()> {
    let signer = ctx.accounts.admin.key();
    let multisig = &mut ctx.accounts.multisig;
    let instruction_hash = multisig.instruction_hash;
    multisig.cancel(&signer)?;

    emit!(MultisigCancelled {
        signer,
        instruction_hash,
    });
    Ok(())
}
