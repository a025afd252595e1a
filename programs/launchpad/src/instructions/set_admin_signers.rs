use anchor_lang::prelude::*;

use crate::{
    constants::MULTISIG_SEED,
    state::{AdminInstruction, Multisig},
};

#[derive(Accounts)]
pub struct SetAdminSigners<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,
    // remaining accounts: the new signer set; empty keeps the current set
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SetAdminSignersParams {
    pub min_signatures: u8,
}

/// Replace the admin signer set, or only the threshold when no signer
/// accounts are passed.
pub fn set_admin_signers<'info>(
    ctx: Context<'_, '_, '_, 'info, SetAdminSigners<'info>>,
    params: &SetAdminSignersParams,
) -> Result<u8> {
    let mut account_infos = ctx.accounts.to_account_infos();
    account_infos.extend(ctx.remaining_accounts.iter().cloned());

    let admin = ctx.accounts.admin.key();
    let multisig = &mut ctx.accounts.multisig;
    let signatures_left = multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::SetAdminSigners,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    if ctx.remaining_accounts.is_empty() {
        multisig.set_threshold(params.min_signatures)?;
    } else {
        let signers: Vec<Pubkey> = ctx.remaining_accounts.iter().map(|a| a.key()).collect();
        multisig.set_signers(&signers, params.min_signatures)?;
    }

    msg!(
        "Admin signers: {}, required: {}",
        multisig.num_signers,
        multisig.min_signatures
    );
    Ok(0)
}
