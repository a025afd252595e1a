//! Create an auction
//!
//! The caller becomes the owner. Dispensing token accounts are passed as
//! `(mint, dispenser)` pairs in the remaining accounts and created here as
//! PDA token accounts under the transfer authority. The new-auction fee is
//! charged in lamports on the rent of the auction record.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token};

use crate::{
    constants::{AUCTION_SEED, DISPENSE_SEED, LAUNCHPAD_SEED, MAX_TOKENS, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::AuctionCreated,
    logic::FeeLedger,
    state::{
        Auction, CommonParams, Custody, FeeKind, Launchpad, PaymentParams, PricingParams,
    },
    utils::{create_authority_token_account, transfer_sol_from_user},
};

#[derive(Accounts)]
#[instruction(params: InitAuctionParams)]
pub struct InitAuction<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: empty PDA, receives base-asset fees
    #[account(mut, seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(mut, seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        init,
        payer = owner,
        space = Auction::LEN,
        seeds = [AUCTION_SEED, params.common.name.as_bytes()],
        bump
    )]
    pub auction: Box<Account<'info, Auction>>,

    #[account(
        constraint = pricing_custody.key() == params.pricing.custody @ LaunchpadError::InvalidArgument
    )]
    pub pricing_custody: Box<Account<'info, Custody>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
    // remaining accounts:
    //   (mint, dispenser) pairs, one per dispensed token (read-only, writable)
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct InitAuctionParams {
    pub enabled: bool,
    pub updatable: bool,
    pub common: CommonParams,
    pub payment: PaymentParams,
    pub pricing: PricingParams,
    /// Dispense ratio per token slot, in the order of the remaining accounts
    pub token_ratios: Vec<u64>,
}

pub fn init_auction<'info>(
    ctx: Context<'_, '_, '_, 'info, InitAuction<'info>>,
    params: &InitAuctionParams,
) -> Result<()> {
    ctx.accounts.launchpad.check_new_auctions_allowed()?;

    let remaining = ctx.remaining_accounts;
    require!(
        remaining.len() % 2 == 0 && remaining.len() / 2 <= MAX_TOKENS,
        LaunchpadError::InvalidArgument
    );
    let num_tokens = remaining.len() / 2;
    Auction::validate_params(&params.common, &params.pricing, &params.token_ratios, num_tokens)?;

    // Charge the new-auction fee on the rent of the auction record
    let rent_lamports = Rent::get()?.minimum_balance(Auction::LEN);
    let fee = FeeLedger::record_fee(&mut ctx.accounts.launchpad, FeeKind::NewAuction, rent_lamports)?;
    transfer_sol_from_user(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.transfer_authority.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        fee,
    )?;

    let creation_time = if cfg!(feature = "test") {
        0
    } else {
        Clock::get()?.unix_timestamp
    };

    let auction_key = ctx.accounts.auction.key();
    let auction = &mut ctx.accounts.auction;
    auction.initialize(
        ctx.accounts.owner.key(),
        params.enabled,
        params.updatable,
        params.common.clone(),
        params.payment,
        params.pricing,
        &params.token_ratios,
        creation_time,
        ctx.bumps.auction,
    )?;
    auction.instance = ctx.accounts.launchpad.next_auction_instance()?;

    for (i, pair) in remaining.chunks_exact(2).enumerate() {
        let mint = &pair[0];
        let dispenser = &pair[1];
        require_keys_eq!(*mint.owner, token::ID, LaunchpadError::InvalidArgument);

        let (expected, bump) = Pubkey::find_program_address(
            &[DISPENSE_SEED, mint.key.as_ref(), auction_key.as_ref()],
            ctx.program_id,
        );
        require_keys_eq!(expected, *dispenser.key, LaunchpadError::InvalidTokenAccount);

        create_authority_token_account(
            ctx.accounts.owner.to_account_info(),
            dispenser.clone(),
            mint.clone(),
            ctx.accounts.transfer_authority.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            &[DISPENSE_SEED, mint.key.as_ref(), auction_key.as_ref(), &[bump]],
        )?;
        auction.add_token(*dispenser.key, params.token_ratios[i])?;
    }

    msg!(
        "Auction {} created by {} with {} token(s), fee {} lamports",
        params.common.name,
        auction.owner,
        auction.num_tokens,
        fee
    );
    emit!(AuctionCreated {
        auction: auction_key,
        owner: auction.owner,
        num_tokens: auction.num_tokens,
        fee_lamports: fee,
    });
    Ok(())
}
