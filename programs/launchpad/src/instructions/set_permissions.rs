use anchor_lang::prelude::*;

use crate::{
    constants::{LAUNCHPAD_SEED, MULTISIG_SEED},
    events::PermissionsUpdated,
    state::{AdminInstruction, Launchpad, Multisig, Permissions},
};

#[derive(Accounts)]
pub struct SetPermissions<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    #[account(mut, seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SetPermissionsParams {
    pub allow_new_auctions: bool,
    pub allow_auction_updates: bool,
    pub allow_new_bids: bool,
    pub allow_withdrawals: bool,
}

pub fn set_permissions<'info>(
    ctx: Context<'_, '_, '_, 'info, SetPermissions<'info>>,
    params: &SetPermissionsParams,
) -> Result<u8> {
    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::SetPermissions,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    ctx.accounts.launchpad.set_permissions(Permissions {
        allow_new_auctions: params.allow_new_auctions,
        allow_auction_updates: params.allow_auction_updates,
        allow_new_bids: params.allow_new_bids,
        allow_withdrawals: params.allow_withdrawals,
    });

    msg!(
        "Permissions: new_auctions={}, auction_updates={}, new_bids={}, withdrawals={}",
        params.allow_new_auctions,
        params.allow_auction_updates,
        params.allow_new_bids,
        params.allow_withdrawals
    );
    emit!(PermissionsUpdated {
        allow_new_auctions: params.allow_new_auctions,
        allow_auction_updates: params.allow_auction_updates,
        allow_new_bids: params.allow_new_bids,
        allow_withdrawals: params.allow_withdrawals,
    });
    Ok(0)
}
