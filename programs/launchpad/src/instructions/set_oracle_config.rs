use anchor_lang::prelude::*;

use crate::{
    constants::{CUSTODY_SEED, MULTISIG_SEED},
    events::OracleConfigUpdated,
    state::{AdminInstruction, Custody, Multisig, OracleParams},
};

#[derive(Accounts)]
pub struct SetOracleConfig<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, custody.mint.as_ref()],
        bump = custody.bump
    )]
    pub custody: Box<Account<'info, Custody>>,
}

pub type SetOracleConfigParams = OracleParams;

pub fn set_oracle_config<'info>(
    ctx: Context<'_, '_, '_, 'info, SetOracleConfig<'info>>,
    params: &SetOracleConfigParams,
) -> Result<u8> {
    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::SetOracleConfig,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    let custody = &mut ctx.accounts.custody;
    custody.set_oracle_config(params);

    emit!(OracleConfigUpdated {
        custody: custody.key(),
        oracle_account: params.oracle_account,
        max_oracle_price_error: params.max_oracle_price_error,
        max_oracle_price_age_sec: params.max_oracle_price_age_sec,
    });
    Ok(0)
}
