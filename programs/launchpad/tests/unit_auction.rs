mod common;

use anchor_lang::prelude::*;
use common::*;
use launchpad::constants::MAX_TOKENS;
use launchpad::error::LaunchpadError;
use launchpad::state::{
    Auction, AuctionToken, PaymentChannel, PaymentParams, Permissions, PricingModel,
    RepriceFunction,
};

fn serialized(auction: &Auction) -> Vec<u8> {
    let mut data = Vec::new();
    auction.try_serialize(&mut data).unwrap();
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_auction_stats() {
        let auction = new_auction("fresh", true);

        assert_eq!(auction.num_tokens, 0);
        assert!(auction
            .tokens
            .iter()
            .all(|t| *t == AuctionToken::default()));
        for tier in [auction.stats.wl_bidders, auction.stats.reg_bidders] {
            assert_eq!(tier.min_fill_price, u64::MAX);
            assert_eq!(tier.max_fill_price, 0);
            assert_eq!(tier.fills_volume, 0);
            assert_eq!(tier.weighted_fills_sum, 0);
            assert_eq!(tier.num_trades, 0);
        }
        assert_eq!(auction.stats.first_trade_time, 0);
        assert_eq!(auction.stats.last_trade_time, 0);
        assert_eq!(auction.update_time, auction.creation_time);
    }

    #[test]
    fn test_new_auctions_gated_by_permission() {
        let mut launchpad = initialized_launchpad();
        launchpad.set_permissions(Permissions {
            allow_new_auctions: false,
            ..Permissions::all()
        });
        assert_launchpad_error(
            launchpad.check_new_auctions_allowed(),
            LaunchpadError::NewAuctionsNotAllowed,
        );

        launchpad.set_permissions(Permissions::all());
        launchpad.check_new_auctions_allowed().unwrap();

        let owner = Pubkey::new_unique();
        let mut auction = Auction::default();
        auction
            .initialize(
                owner,
                false,
                true,
                common_params("gated"),
                payment_params(),
                dda_pricing(Pubkey::new_unique()),
                &[],
                0,
                255,
            )
            .unwrap();
        assert_eq!(auction.owner, owner);
        assert_eq!(auction.num_tokens, 0);
    }

    #[test]
    fn test_price_bounds_ordering() {
        let common = common_params("bounds");
        let mut pricing = dda_pricing(Pubkey::new_unique());
        pricing.min_price = pricing.start_price + 1;
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[], 0),
            LaunchpadError::InvalidOrdering,
        );

        let mut pricing = dda_pricing(Pubkey::new_unique());
        pricing.max_price = pricing.start_price - 1;
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[], 0),
            LaunchpadError::InvalidOrdering,
        );
    }

    #[test]
    fn test_time_window_ordering() {
        let pricing = dda_pricing(Pubkey::new_unique());

        let mut common = common_params("times");
        common.presale_end_time = common.start_time + 1;
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[], 0),
            LaunchpadError::InvalidOrdering,
        );

        let mut common = common_params("times");
        common.end_time = common.start_time - 1;
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[], 0),
            LaunchpadError::InvalidOrdering,
        );

        let mut common = common_params("times");
        common.presale_start_time = common.presale_end_time + 1;
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[], 0),
            LaunchpadError::InvalidOrdering,
        );
    }

    #[test]
    fn test_metadata_and_token_validation() {
        let pricing = dda_pricing(Pubkey::new_unique());
        assert_launchpad_error(
            Auction::validate_params(&common_params(""), &pricing, &[], 0),
            LaunchpadError::InvalidArgument,
        );
        assert_launchpad_error(
            Auction::validate_params(&common_params(&"x".repeat(33)), &pricing, &[], 0),
            LaunchpadError::InvalidArgument,
        );

        let common = common_params("tokens");
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[1; MAX_TOKENS + 1], 0),
            LaunchpadError::InvalidArgument,
        );
        // Ratios must cover every populated slot
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[1], 2),
            LaunchpadError::InvalidArgument,
        );
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[1, 0], 2),
            LaunchpadError::InvalidArgument,
        );
        Auction::validate_params(&common, &pricing, &[1, 3], 2).unwrap();
    }

    #[test]
    fn test_dynamic_pricing_needs_steps() {
        let common = common_params("steps");
        let mut pricing = dda_pricing(Pubkey::new_unique());
        pricing.reprice_delay = 0;
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[], 0),
            LaunchpadError::InvalidArgument,
        );

        let mut pricing = dda_pricing(Pubkey::new_unique());
        pricing.reprice_function = RepriceFunction::Exponential;
        pricing.tick_size = 10_000;
        assert_launchpad_error(
            Auction::validate_params(&common, &pricing, &[], 0),
            LaunchpadError::InvalidArgument,
        );

        // Fixed-price auctions ignore the step configuration
        let mut pricing = dda_pricing(Pubkey::new_unique());
        pricing.pricing_model = PricingModel::Fixed;
        pricing.reprice_delay = 0;
        pricing.amount_per_level = 0;
        Auction::validate_params(&common, &pricing, &[], 0).unwrap();
    }

    #[test]
    fn test_frozen_auction_rejects_update_unchanged() {
        let mut auction = new_auction("frozen", false);
        let before = serialized(&auction);

        let mut common = common_params("frozen");
        common.description = "changed".to_string();
        let closed = Permissions {
            allow_auction_updates: false,
            ..Permissions::all()
        };
        // NotUpdatable wins over the launchpad permission
        assert_launchpad_error(
            auction.update(&closed, common.clone(), payment_params(), auction.pricing, &[1], 50),
            LaunchpadError::NotUpdatable,
        );
        assert_launchpad_error(
            auction.update(&Permissions::all(), common, payment_params(), auction.pricing, &[1], 50),
            LaunchpadError::NotUpdatable,
        );
        assert_eq!(serialized(&auction), before);
    }

    #[test]
    fn test_update_gated_by_permission() {
        let mut auction = new_auction("gated", true);
        let closed = Permissions {
            allow_auction_updates: false,
            ..Permissions::all()
        };
        assert_launchpad_error(
            auction.update(&closed, common_params("gated"), payment_params(), auction.pricing, &[], 5),
            LaunchpadError::AuctionUpdatesNotAllowed,
        );
    }

    #[test]
    fn test_update_applies_changes() {
        let mut auction = new_auction("mutable", true);
        auction.add_token(Pubkey::new_unique(), 1).unwrap();

        let mut common = common_params("mutable");
        common.end_time = END + 100;
        let mut pricing = auction.pricing;
        pricing.tick_size = 25;
        auction
            .update(&Permissions::all(), common, payment_params(), pricing, &[7], 42)
            .unwrap();

        assert_eq!(auction.common.end_time, END + 100);
        assert_eq!(auction.pricing.tick_size, 25);
        assert_eq!(auction.tokens[0].ratio, 7);
        assert_eq!(auction.update_time, 42);
    }

    #[test]
    fn test_update_cannot_rename() {
        let mut auction = new_auction("named", true);
        assert_launchpad_error(
            auction.update(
                &Permissions::all(),
                common_params("renamed"),
                payment_params(),
                auction.pricing,
                &[],
                1,
            ),
            LaunchpadError::InvalidArgument,
        );
        assert_eq!(auction.common.name, "named");
    }

    #[test]
    fn test_token_slots() {
        let mut auction = new_auction("slots", true);
        let accounts: Vec<Pubkey> = (0..MAX_TOKENS).map(|_| Pubkey::new_unique()).collect();
        for (i, account) in accounts.iter().enumerate() {
            auction.add_token(*account, i as u64 + 1).unwrap();
        }
        assert_eq!(auction.num_tokens as usize, MAX_TOKENS);
        assert_eq!(auction.active_tokens()[2].account, accounts[2]);
        assert_eq!(auction.active_tokens()[2].ratio, 3);
        assert_launchpad_error(
            auction.add_token(Pubkey::new_unique(), 1),
            LaunchpadError::InvalidArgument,
        );
    }

    #[test]
    fn test_enable_is_independent_of_updatable() {
        let mut auction = new_auction("toggle", false);
        auction.set_enabled(false);
        assert!(!auction.enabled);
        auction.set_enabled(true);
        assert!(auction.enabled);
        assert!(!auction.updatable);
    }

    #[test]
    fn test_payment_channels() {
        let pricing_custody = Pubkey::new_unique();
        let other_custody = Pubkey::new_unique();
        let usdc_mint = Pubkey::new_unique();
        let wsol = anchor_spl::token::spl_token::native_mint::ID;

        assert_eq!(
            PaymentChannel::classify(&wsol, &other_custody, &pricing_custody),
            PaymentChannel::Sol
        );
        assert_eq!(
            PaymentChannel::classify(&usdc_mint, &pricing_custody, &pricing_custody),
            PaymentChannel::Usdc
        );
        assert_eq!(
            PaymentChannel::classify(&usdc_mint, &other_custody, &pricing_custody),
            PaymentChannel::OtherToken
        );

        let payment = PaymentParams {
            accept_sol: false,
            accept_usdc: true,
            accept_other_tokens: false,
        };
        assert!(!payment.accepts(PaymentChannel::Sol));
        assert!(payment.accepts(PaymentChannel::Usdc));
        assert!(!payment.accepts(PaymentChannel::OtherToken));
    }

    #[cfg(not(feature = "test"))]
    #[test]
    fn test_clock_injection_requires_test_build() {
        let mut auction = new_auction("clock", true);
        assert_launchpad_error(auction.set_test_time(500), LaunchpadError::InvalidEnvironment);
        assert_eq!(auction.creation_time, 0);
    }

    #[cfg(feature = "test")]
    #[test]
    fn test_clock_injection() {
        let mut auction = new_auction("clock", true);
        auction.set_test_time(500).unwrap();
        assert_eq!(auction.get_time().unwrap(), 500);
    }
}
