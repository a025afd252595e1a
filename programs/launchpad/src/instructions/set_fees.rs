use anchor_lang::prelude::*;

use crate::{
    constants::{LAUNCHPAD_SEED, MULTISIG_SEED},
    events::FeesUpdated,
    state::{AdminInstruction, Fee, Fees, Launchpad, Multisig},
};

#[derive(Accounts)]
pub struct SetFees<'info> {
    pub admin: Signer<'info>,

    #[account(mut, seeds = [MULTISIG_SEED], bump = multisig.bump)]
    pub multisig: Box<Account<'info, Multisig>>,

    #[account(mut, seeds = [LAUNCHPAD_SEED], bump = launchpad.launchpad_bump)]
    pub launchpad: Box<Account<'info, Launchpad>>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SetFeesParams {
    /// Charged in lamports on the auction record's rent
    pub new_auction: Fee,
    /// Charged in lamports on the auction record's rent
    pub auction_update: Fee,
    /// Charged in payment tokens on `amount * current_price` of a rejected bid
    pub invalid_bid: Fee,
    /// Charged in payment tokens on the payment of a filled bid
    pub trade: Fee,
}

impl From<&SetFeesParams> for Fees {
    fn from(params: &SetFeesParams) -> Self {
        Fees {
            new_auction: params.new_auction,
            auction_update: params.auction_update,
            invalid_bid: params.invalid_bid,
            trade: params.trade,
        }
    }
}

pub fn set_fees<'info>(
    ctx: Context<'_, '_, '_, 'info, SetFees<'info>>,
    params: &SetFeesParams,
) -> Result<u8> {
    // Reject malformed fractions before recording an approval
    let fees = Fees::from(params);
    for fee in [fees.new_auction, fees.auction_update, fees.invalid_bid, fees.trade] {
        fee.validate()?;
    }

    let account_infos = ctx.accounts.to_account_infos();
    let admin = ctx.accounts.admin.key();
    let signatures_left = ctx.accounts.multisig.sign_instruction(
        &admin,
        &account_infos[1..],
        AdminInstruction::SetFees,
        params,
    )?;
    if signatures_left > 0 {
        return Ok(signatures_left);
    }

    ctx.accounts.launchpad.set_fees(fees)?;

    emit!(FeesUpdated {
        new_auction: [fees.new_auction.numerator, fees.new_auction.denominator],
        auction_update: [fees.auction_update.numerator, fees.auction_update.denominator],
        invalid_bid: [fees.invalid_bid.numerator, fees.invalid_bid.denominator],
        trade: [fees.trade.numerator, fees.trade.denominator],
    });
    Ok(0)
}
