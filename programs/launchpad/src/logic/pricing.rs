//! Dutch-auction pricing engine
//!
//! Pure functions keyed by the auction's pricing tags. The dynamic model moves
//! the price one tick down for every elapsed `reprice_delay` since the start
//! and one tick up for every `amount_per_level` units filled, then clamps the
//! result to `[min_price, max_price]`.

use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_POWER, PRICE_SCALE},
    state::{AmountFunction, PricingModel, PricingParams, RepriceFunction},
    utils::{checked_as_u64, SafeMath},
};

/// Number of whole reprice periods elapsed since `start_time`
pub fn decay_steps(pricing: &PricingParams, start_time: i64, now: i64) -> u64 {
    if now <= start_time || pricing.reprice_delay <= 0 {
        return 0;
    }
    let elapsed = now as i128 - start_time as i128;
    u64::try_from(elapsed / pricing.reprice_delay as i128).unwrap_or(u64::MAX)
}

/// Number of fully filled price levels
pub fn volume_levels(pricing: &PricingParams, total_fills: u64) -> u64 {
    if pricing.amount_per_level == 0 {
        return 0;
    }
    total_fills / pricing.amount_per_level
}

/// Price per unit of auction inventory at `now`
pub fn current_price(
    pricing: &PricingParams,
    start_time: i64,
    total_fills: u64,
    now: i64,
) -> Result<u64> {
    match pricing.pricing_model {
        PricingModel::Fixed => Ok(pricing.start_price),
        PricingModel::DynamicDutchAuction => {
            let down = decay_steps(pricing, start_time, now);
            let up = volume_levels(pricing, total_fills);
            let price = match pricing.reprice_function {
                RepriceFunction::Linear => reprice_linear(pricing, down, up),
                RepriceFunction::Exponential => reprice_exponential(pricing, down, up)?,
            };
            Ok(price.clamp(pricing.min_price, pricing.max_price))
        }
    }
}

/// Inventory that can still be filled before the price steps again
pub fn amount_available(pricing: &PricingParams, total_fills: u64) -> u64 {
    match pricing.pricing_model {
        PricingModel::Fixed => u64::MAX,
        PricingModel::DynamicDutchAuction => match pricing.amount_function {
            AmountFunction::Fixed => {
                if pricing.amount_per_level == 0 {
                    return 0;
                }
                pricing.amount_per_level - total_fills % pricing.amount_per_level
            }
        },
    }
}

fn reprice_linear(pricing: &PricingParams, down: u64, up: u64) -> u64 {
    let net_steps = up as i128 - down as i128;
    let price = (pricing.start_price as i128)
        .saturating_add(net_steps.saturating_mul(pricing.tick_size as i128));
    price.clamp(0, u64::MAX as i128) as u64
}

/// Each net step scales the price by `(1 +/- tick_size / 10_000)`
fn reprice_exponential(pricing: &PricingParams, down: u64, up: u64) -> Result<u64> {
    let tick = pricing.tick_size.min(BPS_POWER) as u128;
    let bps = BPS_POWER as u128;
    let start = pricing.start_price as u128;

    if up >= down {
        let factor = PRICE_SCALE.safe_mul(bps + tick)?.safe_div(bps)?;
        // Anything past u64 range is clamped to max_price by the caller
        let cap = (u64::MAX as u128).safe_mul(PRICE_SCALE)?.safe_div(start.max(1))?;
        let multiplier = pow_scaled(factor, up - down, cap);
        checked_as_u64(start.safe_mul(multiplier)?.safe_div(PRICE_SCALE)?)
    } else {
        let factor = PRICE_SCALE.safe_mul(bps - tick)?.safe_div(bps)?;
        let multiplier = pow_scaled(factor, down - up, PRICE_SCALE);
        checked_as_u64(start.safe_mul(multiplier)?.safe_div(PRICE_SCALE)?)
    }
}

/// `factor^exp` in PRICE_SCALE fixed point by binary exponentiation,
/// saturating at `cap`
fn pow_scaled(factor: u128, mut exp: u64, cap: u128) -> u128 {
    let mut result = PRICE_SCALE;
    let mut base = factor;
    while exp > 0 {
        if exp & 1 == 1 {
            result = match result.checked_mul(base) {
                Some(v) => (v / PRICE_SCALE).min(cap),
                None => return cap,
            };
        }
        exp >>= 1;
        if exp > 0 {
            base = match base.checked_mul(base) {
                Some(v) => (v / PRICE_SCALE).min(cap.max(PRICE_SCALE)),
                None => cap.max(PRICE_SCALE),
            };
        }
    }
    result
}
