//! Launchpad state structures
//!
//! Every record is a PDA with a fixed-size layout; see `utils::seeds`.

pub mod auction;
pub mod bid;
pub mod custody;
pub mod launchpad;
pub mod multisig;
pub mod oracle;
pub mod seller_balance;

pub use auction::*;
pub use bid::*;
pub use custody::*;
pub use launchpad::*;
pub use multisig::*;
pub use oracle::*;
pub use seller_balance::*;

#[cfg(test)]
mod size_assertions {
    use super::*;
    use static_assertions::const_assert;

    // Accounts must stay below the 10 KiB CPI allocation limit
    const_assert!(Auction::LEN <= 10_240);
    const_assert!(Multisig::LEN == 8 + 1 + 1 + 1 + 1 + 2 + 8 + 32 * 6 + 6 + 1 + 1);
    const_assert!(TestOracle::LEN == 36);
}
