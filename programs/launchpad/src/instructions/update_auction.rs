use anchor_lang::prelude::*;

use crate::{
    constants::{AUCTION_SEED, LAUNCHPAD_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::AuctionUpdated,
    logic::FeeLedger,
    state::{Auction, CommonParams, Custody, FeeKind, Launchpad, PaymentParams, PricingParams},
    utils::transfer_sol_from_user,
};

#[derive(Accounts)]
#[instruction(params: UpdateAuctionParams)]
pub struct UpdateAuction<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: empty PDA, receives base-asset fees
    #[account(mut, seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(mut, seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        mut,
        has_one = owner @ LaunchpadError::Unauthorized,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,

    #[account(
        constraint = pricing_custody.key() == params.pricing.custody @ LaunchpadError::InvalidArgument
    )]
    pub pricing_custody: Box<Account<'info, Custody>>,

    pub system_program: Program<'info, System>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct UpdateAuctionParams {
    pub common: CommonParams,
    pub payment: PaymentParams,
    pub pricing: PricingParams,
    pub token_ratios: Vec<u64>,
}

pub fn update_auction(ctx: Context<UpdateAuction>, params: &UpdateAuctionParams) -> Result<()> {
    let now = ctx.accounts.auction.get_time()?;
    let permissions = ctx.accounts.launchpad.permissions;
    ctx.accounts.auction.update(
        &permissions,
        params.common.clone(),
        params.payment,
        params.pricing,
        &params.token_ratios,
        now,
    )?;

    let rent_lamports = Rent::get()?.minimum_balance(Auction::LEN);
    let fee = FeeLedger::record_fee(&mut ctx.accounts.launchpad, FeeKind::AuctionUpdate, rent_lamports)?;
    transfer_sol_from_user(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.transfer_authority.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        fee,
    )?;

    emit!(AuctionUpdated {
        auction: ctx.accounts.auction.key(),
        fee_lamports: fee,
        update_time: now,
    });
    Ok(())
}
