use anchor_lang::prelude::*;

use crate::{
    constants::{AUCTION_SEED, MULTISIG_SEED},
    state::{AdminInstruction, Auction, Multisig},
};

#[derive(Accounts)]
pub struct SetTestTime<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    #[account(
        mut,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SetTestTimeParams {
    pub time: i64,
}

/// Move the auction clock; only available in builds with the `test` feature
pub fn set_test_time<'info>(
    ctx: Context<'_, '_, '_, 'info, SetTestTime<'info>>,
    params: &SetTestTimeParams,
) -> Result<u8> {
    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::SetTestTime,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    ctx.accounts.auction.set_test_time(params.time)?;
    Ok(0)
}
