mod common;

use anchor_lang::prelude::*;
use common::{assert_launchpad_error, initialized_launchpad, new_auction, new_bid, START};
use launchpad::error::LaunchpadError;
use launchpad::logic::FeeLedger;
use launchpad::state::{BidOutcome, Custody, Fee, FeeKind, Fees, OracleParams, Permissions, PricingModel};

fn custody() -> Custody {
    let mut custody = Custody::default();
    custody
        .initialize(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            6,
            &OracleParams::default(),
            255,
        )
        .unwrap();
    custody
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_rounds_down() {
        let fee = Fee { numerator: 1, denominator: 1_000 };
        assert_eq!(fee.apply(1_000).unwrap(), 1);
        assert_eq!(fee.apply(999).unwrap(), 0);
        assert_eq!(fee.apply(0).unwrap(), 0);

        // Full-range amounts do not overflow the intermediate product
        let fee = Fee { numerator: 3, denominator: 7 };
        assert_eq!(fee.apply(u64::MAX).unwrap(), (u64::MAX as u128 * 3 / 7) as u64);
    }

    #[test]
    fn test_base_fees_accumulate_in_launchpad() {
        let mut launchpad = initialized_launchpad();
        let fee = FeeLedger::record_fee(&mut launchpad, FeeKind::NewAuction, 2_500_000).unwrap();
        assert_eq!(fee, 25_000);
        FeeLedger::record_fee(&mut launchpad, FeeKind::NewAuction, 2_500_000).unwrap();
        FeeLedger::record_fee(&mut launchpad, FeeKind::AuctionUpdate, 1_000).unwrap();

        assert_eq!(launchpad.collected_fees.new_auction_sol, 50_000);
        assert_eq!(launchpad.collected_fees.auction_update_sol, 10);
        assert_eq!(launchpad.collected_fees.trade_usdc, 0);
    }

    #[test]
    fn test_quote_fees_recorded_in_launchpad_and_custody() {
        let mut launchpad = initialized_launchpad();
        let mut custody = custody();

        let fee = FeeLedger::record_quote_fee(&mut launchpad, &mut custody, FeeKind::Trade, 10_000)
            .unwrap();
        assert_eq!(fee, 100);
        FeeLedger::record_quote_fee(&mut launchpad, &mut custody, FeeKind::InvalidBid, 500).unwrap();

        assert_eq!(launchpad.collected_fees.trade_usdc, 100);
        assert_eq!(launchpad.collected_fees.invalid_bid_usdc, 5);
        assert_eq!(custody.collected_fees, 105);

        // Withdrawal drains the custody balance; launchpad totals are lifetime
        custody.withdraw_fees(105).unwrap();
        assert_eq!(custody.collected_fees, 0);
        assert_eq!(launchpad.collected_fees.trade_usdc, 100);
    }

    #[test]
    fn test_quote_fee_rejects_base_kinds() {
        let mut launchpad = initialized_launchpad();
        let mut custody = custody();
        assert_launchpad_error(
            FeeLedger::record_quote_fee(&mut launchpad, &mut custody, FeeKind::NewAuction, 100),
            LaunchpadError::InvalidArgument,
        );
    }

    #[test]
    fn test_overflow_leaves_accumulators_untouched() {
        let mut launchpad = initialized_launchpad();
        let mut custody = custody();
        launchpad.collected_fees.trade_usdc = 7;
        custody.collected_fees = u64::MAX;

        assert_launchpad_error(
            FeeLedger::record_quote_fee(&mut launchpad, &mut custody, FeeKind::Trade, 1_000),
            LaunchpadError::FeeOverflow,
        );
        assert_eq!(launchpad.collected_fees.trade_usdc, 7);
        assert_eq!(custody.collected_fees, u64::MAX);

        launchpad.collected_fees.new_auction_sol = u64::MAX;
        assert_launchpad_error(
            FeeLedger::record_fee(&mut launchpad, FeeKind::NewAuction, 1_000),
            LaunchpadError::FeeOverflow,
        );
        assert_eq!(launchpad.collected_fees.new_auction_sol, u64::MAX);
    }

    #[test]
    fn test_set_fees_rejects_zero_denominator() {
        let mut launchpad = initialized_launchpad();
        let before = launchpad.fees;
        let mut fees = Fees::uniform(Fee { numerator: 2, denominator: 100 });
        fees.trade = Fee { numerator: 1, denominator: 0 };

        assert_launchpad_error(launchpad.set_fees(fees), LaunchpadError::InvalidFraction);
        assert_eq!(launchpad.fees, before);

        fees.trade = Fee { numerator: 5, denominator: 1_000 };
        launchpad.set_fees(fees).unwrap();
        assert_eq!(launchpad.fee(FeeKind::Trade), Fee { numerator: 5, denominator: 1_000 });
        assert_eq!(launchpad.fee(FeeKind::NewAuction), Fee { numerator: 2, denominator: 100 });
    }

    #[test]
    fn test_trade_fee_on_filled_bid() {
        let mut launchpad = initialized_launchpad();
        launchpad
            .set_fees(Fees::uniform(Fee { numerator: 1, denominator: 1_000 }))
            .unwrap();
        let mut custody = custody();

        let mut auction = new_auction("fixed", true);
        auction.pricing.pricing_model = PricingModel::Fixed;
        auction.pricing.start_price = 1;
        auction.pricing.min_price = 1;
        let mut bid = new_bid(Pubkey::new_unique(), false);

        let outcome = auction
            .place_bid(&mut bid, &Permissions::all(), 1_000, 1, START)
            .unwrap();
        assert_eq!(outcome, BidOutcome::Filled { amount: 1_000, price: 1 });

        let (kind, base) = outcome.fee_base(1_000).unwrap();
        assert_eq!((kind, base), (FeeKind::Trade, 1_000));
        let fee = FeeLedger::record_quote_fee(&mut launchpad, &mut custody, kind, base).unwrap();
        assert_eq!(fee, 1);
        assert_eq!(launchpad.collected_fees.trade_usdc, 1);
        assert_eq!(custody.collected_fees, 1);
    }

    #[test]
    fn test_invalid_bid_fee_uses_current_price() {
        let mut launchpad = initialized_launchpad();
        let mut custody = custody();
        let mut auction = new_auction("priced-out", true);
        let mut bid = new_bid(Pubkey::new_unique(), false);

        // A zero limit is always priced out but still pays on the current price
        let outcome = auction
            .place_bid(&mut bid, &Permissions::all(), 500, 0, START)
            .unwrap();
        assert_eq!(outcome, BidOutcome::Rejected { price: 1_000 });

        let (kind, base) = outcome.fee_base(500).unwrap();
        assert_eq!((kind, base), (FeeKind::InvalidBid, 500_000));
        let fee = FeeLedger::record_quote_fee(&mut launchpad, &mut custody, kind, base).unwrap();
        assert_eq!(fee, 5_000);
        assert_eq!(launchpad.collected_fees.invalid_bid_usdc, 5_000);
        assert_eq!(launchpad.collected_fees.trade_usdc, 0);
        assert_eq!(custody.collected_fees, 5_000);
    }

    #[test]
    fn test_withdraw_more_than_collected() {
        let mut custody = custody();
        custody.record_fee(50).unwrap();
        assert_launchpad_error(custody.withdraw_fees(51), LaunchpadError::InsufficientFees);
        assert_eq!(custody.collected_fees, 50);
    }
}
