//! Shared fixtures for launchpad unit tests
#![allow(dead_code)]

use anchor_lang::error::ERROR_CODE_OFFSET;
use anchor_lang::prelude::*;
use launchpad::error::LaunchpadError;
use launchpad::state::{
    AmountFunction, Auction, Bid, CommonParams, Launchpad, PaymentParams, PricingModel,
    PricingParams, RepriceFunction,
};

pub const PRESALE_START: i64 = 100;
pub const PRESALE_END: i64 = 200;
pub const START: i64 = 200;
pub const END: i64 = 10_000;

pub const REG_FILL_LIMIT: u64 = 1_000;
pub const WL_FILL_LIMIT: u64 = 2_000;

/// Assert that `result` failed with the given launchpad error code
pub fn assert_launchpad_error<T: std::fmt::Debug>(result: Result<T>, expected: LaunchpadError) {
    let err = result.expect_err("expected an error");
    let code = match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected {:?}, got program error {:?}", expected, e),
    };
    assert_eq!(code, expected as u32 + ERROR_CODE_OFFSET, "expected {:?}", expected);
}

pub fn common_params(name: &str) -> CommonParams {
    CommonParams {
        name: name.to_string(),
        description: "Test auction".to_string(),
        about_seller: "Seller".to_string(),
        seller_link: "https://example.com".to_string(),
        start_time: START,
        end_time: END,
        presale_start_time: PRESALE_START,
        presale_end_time: PRESALE_END,
        fill_limit_reg_address: REG_FILL_LIMIT,
        fill_limit_wl_address: WL_FILL_LIMIT,
    }
}

pub fn payment_params() -> PaymentParams {
    PaymentParams {
        accept_sol: true,
        accept_usdc: true,
        accept_other_tokens: true,
    }
}

/// Dynamic Dutch auction: starts at 1000, one tick of 10 per 10 seconds or
/// per 100 units filled
pub fn dda_pricing(custody: Pubkey) -> PricingParams {
    PricingParams {
        custody,
        pricing_model: PricingModel::DynamicDutchAuction,
        start_price: 1_000,
        max_price: 10_000,
        min_price: 100,
        reprice_delay: 10,
        reprice_function: RepriceFunction::Linear,
        amount_function: AmountFunction::Fixed,
        amount_per_level: 100,
        tick_size: 10,
    }
}

pub fn new_auction(name: &str, updatable: bool) -> Auction {
    let mut auction = Auction::default();
    auction
        .initialize(
            Pubkey::new_unique(),
            true,
            updatable,
            common_params(name),
            payment_params(),
            dda_pricing(Pubkey::new_unique()),
            &[1],
            0,
            255,
        )
        .unwrap();
    auction
}

pub fn new_bid(auction: Pubkey, whitelisted: bool) -> Bid {
    let mut bid = Bid::default();
    bid.bind(Pubkey::new_unique(), auction, 0, 254).unwrap();
    bid.whitelisted = whitelisted;
    bid
}

pub fn initialized_launchpad() -> Launchpad {
    let mut launchpad = Launchpad::default();
    launchpad.initialize(255, 254).unwrap();
    launchpad
}
