/// Utility module providing checked arithmetic, PDA derivation and token
/// transfer helpers shared by every instruction handler.
pub mod math_safe;            // Overflow-safe arithmetic traits
pub mod seeds;                // PDA seed derivation
pub mod transfers;            // Token and lamport CPIs

pub use math_safe::*;
pub use seeds::*;
pub use transfers::*;
