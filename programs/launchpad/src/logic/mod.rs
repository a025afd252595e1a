//! Protocol logic modules
//!
//! Pure engines separated from instruction handlers

pub mod fees;
pub mod pricing;

pub use fees::*;
pub use pricing::*;
