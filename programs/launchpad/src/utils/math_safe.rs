/// Provides overflow-safe arithmetic operations for all fee, price and
/// inventory calculations. Every operation returns an error instead of
/// wrapping, so a malformed bid or fee fraction aborts the instruction.

use anchor_lang::prelude::*;
use crate::error::LaunchpadError;

// ============================================================================
// Type Definitions
// ============================================================================

pub trait SafeMath<T> {
    fn safe_add(self, v: T) -> Result<T>;
    fn safe_sub(self, v: T) -> Result<T>;
    fn safe_mul(self, v: T) -> Result<T>;
    fn safe_div(self, v: T) -> Result<T>;
}

// ============================================================================
// Core Implementation
// ============================================================================

macro_rules! impl_safe_math {
    ($type:ty) => {
        impl SafeMath<$type> for $type {
            fn safe_add(self, v: $type) -> Result<$type> {
                self.checked_add(v).ok_or_else(|| {
                    msg!("Math overflow in safe_add: {} + {}", self, v);
                    LaunchpadError::MathOverflow.into()
                })
            }

            fn safe_sub(self, v: $type) -> Result<$type> {
                self.checked_sub(v).ok_or_else(|| {
                    msg!("Math underflow in safe_sub: {} - {}", self, v);
                    LaunchpadError::MathOverflow.into()
                })
            }

            fn safe_mul(self, v: $type) -> Result<$type> {
                self.checked_mul(v).ok_or_else(|| {
                    msg!("Math overflow in safe_mul: {} * {}", self, v);
                    LaunchpadError::MathOverflow.into()
                })
            }

            fn safe_div(self, v: $type) -> Result<$type> {
                if v == 0 {
                    msg!("Division by zero in safe_div: {} / {}", self, v);
                    return Err(LaunchpadError::MathOverflow.into());
                }
                self.checked_div(v).ok_or_else(|| {
                    msg!("Math error in safe_div: {} / {}", self, v);
                    LaunchpadError::MathOverflow.into()
                })
            }
        }
    };
}

impl_safe_math!(u8);
impl_safe_math!(u16);
impl_safe_math!(u32);
impl_safe_math!(u64);
impl_safe_math!(u128);
impl_safe_math!(i32);
impl_safe_math!(i64);
impl_safe_math!(i128);

// ------------------------------------------------------------------------
// Conversions
// ------------------------------------------------------------------------

pub fn checked_as_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        msg!("Value does not fit into u64: {}", value);
        LaunchpadError::MathOverflow.into()
    })
}

/// `a * b / c` evaluated in u128, truncating toward zero
pub fn mul_div_u64(a: u64, b: u64, c: u64) -> Result<u64> {
    let product = (a as u128).safe_mul(b as u128)?;
    checked_as_u64(product.safe_div(c as u128)?)
}

/// 10^exp as u128, bounded so that the result never overflows
pub fn checked_pow10(exp: u32) -> Result<u128> {
    10u128.checked_pow(exp).ok_or_else(|| {
        msg!("Math overflow in checked_pow10: 10^{}", exp);
        LaunchpadError::MathOverflow.into()
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_add_overflow() {
        assert!(u64::MAX.safe_add(1).is_err());
        assert_eq!(100u64.safe_add(50).unwrap(), 150);
    }

    #[test]
    fn test_safe_div_by_zero() {
        assert!(10u64.safe_div(0).is_err());
    }

    #[test]
    fn test_mul_div_truncates() {
        assert_eq!(mul_div_u64(1000, 1, 1000).unwrap(), 1);
        assert_eq!(mul_div_u64(999, 1, 1000).unwrap(), 0);
        assert_eq!(mul_div_u64(u64::MAX, 2, 2).unwrap(), u64::MAX);
        assert!(mul_div_u64(u64::MAX, 2, 1).is_err());
    }
}
