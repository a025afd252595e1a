//! Token launchpad program
//!
//! Sellers run dynamic Dutch auctions for up to four tokens at once, priced
//! against oracle-backed custodies. Administrative calls pass through a
//! multisig approval gate; fees for every action accrue in the launchpad and
//! custody records.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod logic;
pub mod state;
pub mod utils;

use instructions::*;
pub use state::*;

declare_id!("LPDmQvjwLeRzrMYNHq2e4sjVbvfr4vUwyDo6zKmdP5L");

#[program]
pub mod launchpad {
    use super::*;

    // Admin instructions

    pub fn init<'info>(
        ctx: Context<'_, '_, '_, 'info, Init<'info>>,
        params: InitParams,
    ) -> Result<()> {
        instructions::init::init(ctx, &params)
    }

    pub fn set_admin_signers<'info>(
        ctx: Context<'_, '_, '_, 'info, SetAdminSigners<'info>>,
        params: SetAdminSignersParams,
    ) -> Result<u8> {
        instructions::set_admin_signers::set_admin_signers(ctx, &params)
    }

    pub fn cancel_multisig(ctx: Context<CancelMultisig>) -> Result<()> {
        instructions::cancel_multisig::cancel_multisig(ctx)
    }

    pub fn set_fees<'info>(
        ctx: Context<'_, '_, '_, 'info, SetFees<'info>>,
        params: SetFeesParams,
    ) -> Result<u8> {
        instructions::set_fees::set_fees(ctx, &params)
    }

    pub fn set_permissions<'info>(
        ctx: Context<'_, '_, '_, 'info, SetPermissions<'info>>,
        params: SetPermissionsParams,
    ) -> Result<u8> {
        instructions::set_permissions::set_permissions(ctx, &params)
    }

    pub fn init_custody<'info>(
        ctx: Context<'_, '_, '_, 'info, InitCustody<'info>>,
        params: InitCustodyParams,
    ) -> Result<u8> {
        instructions::init_custody::init_custody(ctx, &params)
    }

    pub fn set_oracle_config<'info>(
        ctx: Context<'_, '_, '_, 'info, SetOracleConfig<'info>>,
        params: SetOracleConfigParams,
    ) -> Result<u8> {
        instructions::set_oracle_config::set_oracle_config(ctx, &params)
    }

    pub fn withdraw_fees<'info>(
        ctx: Context<'_, '_, '_, 'info, WithdrawFees<'info>>,
        params: WithdrawFeesParams,
    ) -> Result<u8> {
        instructions::withdraw_fees::withdraw_fees(ctx, &params)
    }

    pub fn withdraw_sol_fees<'info>(
        ctx: Context<'_, '_, '_, 'info, WithdrawSolFees<'info>>,
        params: WithdrawSolFeesParams,
    ) -> Result<u8> {
        instructions::withdraw_sol_fees::withdraw_sol_fees(ctx, &params)
    }

    // Test instructions

    pub fn set_test_oracle_price<'info>(
        ctx: Context<'_, '_, '_, 'info, SetTestOraclePrice<'info>>,
        params: SetTestOraclePriceParams,
    ) -> Result<u8> {
        instructions::set_test_oracle_price::set_test_oracle_price(ctx, &params)
    }

    pub fn set_test_time<'info>(
        ctx: Context<'_, '_, '_, 'info, SetTestTime<'info>>,
        params: SetTestTimeParams,
    ) -> Result<u8> {
        instructions::set_test_time::set_test_time(ctx, &params)
    }

    // Seller instructions

    pub fn init_auction<'info>(
        ctx: Context<'_, '_, '_, 'info, InitAuction<'info>>,
        params: InitAuctionParams,
    ) -> Result<()> {
        instructions::init_auction::init_auction(ctx, &params)
    }

    pub fn update_auction(ctx: Context<UpdateAuction>, params: UpdateAuctionParams) -> Result<()> {
        instructions::update_auction::update_auction(ctx, &params)
    }

    pub fn enable_auction(ctx: Context<EnableAuction>) -> Result<()> {
        instructions::enable_auction::enable_auction(ctx)
    }

    pub fn disable_auction(ctx: Context<DisableAuction>) -> Result<()> {
        instructions::disable_auction::disable_auction(ctx)
    }

    pub fn delete_auction<'info>(
        ctx: Context<'_, '_, '_, 'info, DeleteAuction<'info>>,
    ) -> Result<()> {
        instructions::delete_auction::delete_auction(ctx)
    }

    pub fn add_tokens(ctx: Context<AddTokens>, params: AddTokensParams) -> Result<()> {
        instructions::add_tokens::add_tokens(ctx, &params)
    }

    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, params: WithdrawTokensParams) -> Result<()> {
        instructions::withdraw_tokens::withdraw_tokens(ctx, &params)
    }

    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, params: WithdrawFundsParams) -> Result<()> {
        instructions::withdraw_funds::withdraw_funds(ctx, &params)
    }

    pub fn whitelist_add(ctx: Context<WhitelistAdd>, params: WhitelistParams) -> Result<()> {
        instructions::whitelist::whitelist_add(ctx, &params)
    }

    pub fn whitelist_remove(ctx: Context<WhitelistRemove>, params: WhitelistParams) -> Result<()> {
        instructions::whitelist::whitelist_remove(ctx, &params)
    }

    // Bidder instructions

    pub fn place_bid<'info>(
        ctx: Context<'_, '_, '_, 'info, PlaceBid<'info>>,
        params: PlaceBidParams,
    ) -> Result<()> {
        instructions::place_bid::place_bid(ctx, &params)
    }

    // Views

    pub fn get_auction_price(ctx: Context<GetAuctionPrice>) -> Result<u64> {
        instructions::get_auction_price::get_auction_price(ctx)
    }

    pub fn get_auction_amount(ctx: Context<GetAuctionAmount>) -> Result<u64> {
        instructions::get_auction_amount::get_auction_amount(ctx)
    }
}
