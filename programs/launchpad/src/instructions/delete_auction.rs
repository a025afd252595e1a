use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::{
    constants::{AUCTION_SEED, LAUNCHPAD_SEED, TRANSFER_AUTHORITY_SEED},
    error::LaunchpadError,
    events::AuctionDeleted,
    state::{Auction, Launchpad},
    utils::close_authority_token_account,
};

#[derive(Accounts)]
pub struct DeleteAuction<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: empty PDA, authority for token accounts
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump = launchpad.transfer_authority_bump)]
    pub transfer_authority: AccountInfo<'info>,

    #[account(seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,

    #[account(
        mut,
        has_one = owner @ LaunchpadError::Unauthorized,
        seeds = [AUCTION_SEED, auction.common.name.as_bytes()],
        bump = auction.bump,
        close = owner
    )]
    pub auction: Box<Account<'info, Auction>>,

    pub token_program: Program<'info, Token>,
    // remaining accounts:
    //   every dispensing account of the auction, in slot order (writable)
}

/// Close a drained auction, returning the rent of the record and of every
/// dispensing account to the owner.
pub fn delete_auction<'info>(ctx: Context<'_, '_, '_, 'info, DeleteAuction<'info>>) -> Result<()> {
    let auction = &ctx.accounts.auction;
    let tokens = auction.active_tokens();
    require!(
        ctx.remaining_accounts.len() == tokens.len(),
        LaunchpadError::InvalidArgument
    );

    for (token, dispenser) in tokens.iter().zip(ctx.remaining_accounts) {
        require_keys_eq!(*dispenser.key, token.account, LaunchpadError::InvalidTokenAccount);
        require_keys_eq!(*dispenser.owner, token::ID, LaunchpadError::InvalidTokenAccount);
        let balance = {
            let data = dispenser.try_borrow_data()?;
            TokenAccount::try_deserialize(&mut &data[..])?.amount
        };
        require!(balance == 0, LaunchpadError::AuctionNotEmpty);

        close_authority_token_account(
            dispenser.clone(),
            ctx.accounts.owner.to_account_info(),
            ctx.accounts.transfer_authority.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.launchpad.transfer_authority_bump,
        )?;
    }

    msg!("Auction {} deleted", auction.common.name);
    emit!(AuctionDeleted {
        auction: auction.key(),
        owner: auction.owner,
    });
    Ok(())
}
