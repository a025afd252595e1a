use anchor_lang::prelude::*;

use crate::{
    constants::{CUSTODY_SEED, MAX_ORACLE_EXPONENT, MULTISIG_SEED, TEST_ORACLE_SEED},
    error::LaunchpadError,
    state::{AdminInstruction, Custody, Multisig, OracleType, TestOracle},
};

#[derive(Accounts)]
pub struct SetTestOraclePrice<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    #[account(
        seeds = [CUSTODY_SEED, custody.mint.as_ref()],
        bump = custody.bump
    )]
    pub custody: Box<Account<'info, Custody>>,

    #[account(
        init_if_needed,
        payer = admin,
        space = TestOracle::LEN,
        seeds = [TEST_ORACLE_SEED, custody.key().as_ref()],
        bump
    )]
    pub oracle_account: Box<Account<'info, TestOracle>>,

    pub system_program: Program<'info, System>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SetTestOraclePriceParams {
    pub price: u64,
    pub expo: i32,
    pub conf: u64,
    pub publish_time: i64,
}

pub fn set_test_oracle_price<'info>(
    ctx: Context<'_, '_, '_, 'info, SetTestOraclePrice<'info>>,
    params: &SetTestOraclePriceParams,
) -> Result<u8> {
    require!(
        params.expo.unsigned_abs() <= MAX_ORACLE_EXPONENT as u32,
        LaunchpadError::InvalidOraclePrice
    );
    let custody = &ctx.accounts.custody;
    require!(
        custody.oracle_type == OracleType::Test,
        LaunchpadError::UnsupportedOracle
    );
    require_keys_eq!(
        custody.oracle_account,
        ctx.accounts.oracle_account.key(),
        LaunchpadError::InvalidOracleAccount
    );

    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::SetTestOraclePrice,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    let oracle = &mut ctx.accounts.oracle_account;
    oracle.price = params.price;
    oracle.expo = params.expo;
    oracle.conf = params.conf;
    oracle.publish_time = params.publish_time;

    msg!(
        "Test oracle price {}e{} conf {} at {}",
        params.price,
        params.expo,
        params.conf,
        params.publish_time
    );
    Ok(0)
}
