/// Instruction module organizing launchpad operations into groups.
/// Admin instructions pass through the multisig gate and return the number of
/// signatures still required; seller and bidder instructions are gated by the
/// launchpad permissions and auction ownership.

// Admin operations
pub mod cancel_multisig;
pub mod init;
pub mod init_custody;
pub mod set_admin_signers;
pub mod set_fees;
pub mod set_oracle_config;
pub mod set_permissions;
pub mod withdraw_fees;
pub mod withdraw_sol_fees;

// Test hooks
pub mod set_test_oracle_price;
pub mod set_test_time;

// Seller operations
pub mod add_tokens;
pub mod delete_auction;
pub mod disable_auction;
pub mod enable_auction;
pub mod init_auction;
pub mod update_auction;
pub mod whitelist;
pub mod withdraw_funds;
pub mod withdraw_tokens;

// Bidder operations
pub mod place_bid;

// Views
pub mod get_auction_amount;
pub mod get_auction_price;

pub use add_tokens::*;
pub use cancel_multisig::*;
pub use delete_auction::*;
pub use disable_auction::*;
pub use enable_auction::*;
pub use get_auction_amount::*;
pub use get_auction_price::*;
pub use init::*;
pub use init_auction::*;
pub use init_custody::*;
pub use place_bid::*;
pub use set_admin_signers::*;
pub use set_fees::*;
pub use set_oracle_config::*;
pub use set_permissions::*;
pub use set_test_oracle_price::*;
pub use set_test_time::*;
pub use update_auction::*;
pub use whitelist::*;
pub use withdraw_fees::*;
pub use withdraw_funds::*;
pub use withdraw_sol_fees::*;
pub use withdraw_tokens::*;
