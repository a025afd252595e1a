//! Place a bid
//!
//! Prices the bid through the auction state machine, converts the cost into
//! the payment custody's token when it differs from the pricing custody,
//! collects payment plus trade fee into the custody vault and dispenses every
//! auction token at its ratio. A bid priced out by the current auction price
//! is not filled but still pays the invalid-bid fee, charged on the requested
//! amount at the current price; the instruction then succeeds so the fee is
//! committed.

use anchor_lang::error::ERROR_CODE_OFFSET;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{AUCTION_SEED, BID_SEED, CUSTODY_SEED, LAUNCHPAD_SEED, SELLER_BALANCE_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::{BidFilled, BidRejected},
    logic::FeeLedger,
    state::{Auction, Bid, BidOutcome, Custody, Launchpad, PaymentChannel, SellerBalance},
    utils::{transfer_from_authority, transfer_from_user, SafeMath},
};

#[derive(Accounts)]
pub struct PlaceBid<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,

    #[account(
        mut,
        constraint = funding_account.mint == payment_custody.mint @ LaunchpadError::InvalidTokenAccount,
        constraint = funding_account.owner == bidder.key() @ LaunchpadError::Unauthorized
    )]
    pub funding_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: empty PDA, authority for token accounts
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(mut, seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        mut,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump
    )]
    pub auction: Box<Account<'info, Auction>>,

    #[account(
        constraint = pricing_custody.key() == auction.pricing.custody @ LaunchpadError::InvalidArgument
    )]
    pub pricing_custody: Box<Account<'info, Custody>>,

    /// CHECK: matched against the pricing custody's oracle config when read
    pub pricing_oracle_account: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, payment_custody.mint.as_ref()],
        bump = payment_custody.bump
    )]
    pub payment_custody: Box<Account<'info, Custody>>,

    /// CHECK: matched against the payment custody's oracle config when read
    pub payment_oracle_account: AccountInfo<'info>,

    #[account(
        init_if_needed,
        payer = bidder,
        space = Bid::LEN,
        seeds = [BID_SEED, bidder.key().as_ref(), auction.key().as_ref()],
        bump
    )]
    pub bid: Box<Account<'info, Bid>>,

    #[account(
        init_if_needed,
        payer = bidder,
        space = SellerBalance::LEN,
        seeds = [SELLER_BALANCE_SEED, auction.owner.as_ref(), payment_custody.key().as_ref()],
        bump
    )]
    pub seller_balance: Box<Account<'info, SellerBalance>>,

    #[account(
        mut,
        constraint = payment_token_account.key() == payment_custody.token_account @ LaunchpadError::InvalidTokenAccount
    )]
    pub payment_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    // remaining accounts:
    //   dispensing accounts in slot order (writable)
    //   bidder receiving accounts in the same order (writable)
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct PlaceBidParams {
    /// Units of auction inventory requested
    pub amount: u64,
    /// Highest acceptable unit price, in pricing-custody base units
    pub price: u64,
}

impl<'info> PlaceBid<'info> {
    /// Express a pricing-custody amount in payment-custody base units
    fn to_payment_units(&self, amount: u64, now: i64) -> Result<u64> {
        if self.payment_custody.key() == self.pricing_custody.key() {
            return Ok(amount);
        }
        let pricing_price = self
            .pricing_custody
            .read_price(&self.pricing_oracle_account, now)?;
        let payment_price = self
            .payment_custody
            .read_price(&self.payment_oracle_account, now)?;
        pricing_price.convert_amount(
            amount,
            self.pricing_custody.decimals,
            &payment_price,
            self.payment_custody.decimals,
        )
    }
}

pub fn place_bid<'info>(
    ctx: Context<'_, '_, '_, 'info, PlaceBid<'info>>,
    params: &PlaceBidParams,
) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let now = accounts.auction.get_time()?;
    let auction_key = accounts.auction.key();
    let bidder_key = accounts.bidder.key();
    let payment_custody_key = accounts.payment_custody.key();
    let auction_instance = accounts.auction.instance;

    accounts.bid.bind(bidder_key, auction_key, auction_instance, ctx.bumps.bid)?;
    accounts.seller_balance.bind(
        accounts.auction.owner,
        payment_custody_key,
        ctx.bumps.seller_balance,
    )?;

    let channel = PaymentChannel::classify(
        &accounts.payment_custody.mint,
        &payment_custody_key,
        &accounts.auction.pricing.custody,
    );
    require!(
        accounts.auction.payment.accepts(channel),
        LaunchpadError::PaymentNotAccepted
    );

    let permissions = accounts.launchpad.permissions;
    let outcome = accounts.auction.place_bid(
        &mut accounts.bid,
        &permissions,
        params.amount,
        params.price,
        now,
    )?;

    let (fee_kind, fee_base) = outcome.fee_base(params.amount)?;
    let quote = accounts.to_payment_units(fee_base, now)?;
    let fee = FeeLedger::record_quote_fee(
        &mut accounts.launchpad,
        &mut accounts.payment_custody,
        fee_kind,
        quote,
    )?;

    match outcome {
        BidOutcome::Rejected { price } => {
            transfer_from_user(
                accounts.funding_account.to_account_info(),
                accounts.payment_token_account.to_account_info(),
                accounts.bidder.to_account_info(),
                accounts.token_program.to_account_info(),
                fee,
            )?;

            msg!(
                "Bid rejected: price {} above limit {}, fee {}",
                price,
                params.price,
                fee
            );
            emit!(BidRejected {
                auction: auction_key,
                bidder: bidder_key,
                error_code: LaunchpadError::InvalidBid as u32 + ERROR_CODE_OFFSET,
                price,
                max_price: params.price,
                fee_amount: fee,
                timestamp: now,
            });
        }
        BidOutcome::Filled { amount, price } => {
            let payment = quote;
            transfer_from_user(
                accounts.funding_account.to_account_info(),
                accounts.payment_token_account.to_account_info(),
                accounts.bidder.to_account_info(),
                accounts.token_program.to_account_info(),
                payment.safe_add(fee)?,
            )?;
            accounts.seller_balance.credit(payment)?;

            let tokens = accounts.auction.active_tokens().to_vec();
            let num_tokens = tokens.len();
            require!(
                ctx.remaining_accounts.len() == num_tokens * 2,
                LaunchpadError::InvalidArgument
            );
            let (dispensers, receivers) = ctx.remaining_accounts.split_at(num_tokens);
            for ((token, dispenser), receiver) in tokens.iter().zip(dispensers).zip(receivers) {
                require_keys_eq!(*dispenser.key, token.account, LaunchpadError::InvalidTokenAccount);
                transfer_from_authority(
                    dispenser.clone(),
                    receiver.clone(),
                    accounts.transfer_authority.to_account_info(),
                    accounts.token_program.to_account_info(),
                    accounts.launchpad.transfer_authority_bump,
                    amount.safe_mul(token.ratio)?,
                )?;
            }

            msg!(
                "Bid filled: {} at {}, payment {} + fee {}",
                amount,
                price,
                payment,
                fee
            );
            emit!(BidFilled {
                auction: auction_key,
                bidder: bidder_key,
                whitelisted: accounts.bid.whitelisted,
                amount,
                price,
                payment_custody: payment_custody_key,
                payment_amount: payment,
                fee_amount: fee,
                timestamp: now,
            });
        }
    }

    Ok(())
}
