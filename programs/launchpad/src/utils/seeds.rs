/// Deterministic PDA derivation for every launchpad record. Centralizes the
/// seed layout so that instruction constraints, handlers and off-chain callers
/// derive identical addresses.

use anchor_lang::prelude::*;

use crate::constants::*;

pub struct LaunchpadSeeds;

impl LaunchpadSeeds {
    pub fn multisig(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[MULTISIG_SEED], program_id)
    }

    pub fn transfer_authority(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TRANSFER_AUTHORITY_SEED], program_id)
    }

    pub fn launchpad(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[LAUNCHPAD_SEED], program_id)
    }

    pub fn custody(mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CUSTODY_SEED, mint.as_ref()], program_id)
    }

    pub fn custody_token_account(mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CUSTODY_TOKEN_ACCOUNT_SEED, mint.as_ref()], program_id)
    }

    pub fn test_oracle(custody: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TEST_ORACLE_SEED, custody.as_ref()], program_id)
    }

    pub fn auction(name: &str, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[AUCTION_SEED, name.as_bytes()], program_id)
    }

    /// Dispensing token account holding auction inventory of `mint`
    pub fn dispenser(mint: &Pubkey, auction: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DISPENSE_SEED, mint.as_ref(), auction.as_ref()],
            program_id,
        )
    }

    pub fn bid(bidder: &Pubkey, auction: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[BID_SEED, bidder.as_ref(), auction.as_ref()], program_id)
    }

    pub fn seller_balance(owner: &Pubkey, custody: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[SELLER_BALANCE_SEED, owner.as_ref(), custody.as_ref()],
            program_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_derive_distinct_addresses() {
        let program_id = crate::ID;
        let mint = Pubkey::new_unique();
        let (custody, _) = LaunchpadSeeds::custody(&mint, &program_id);
        let (custody_ta, _) = LaunchpadSeeds::custody_token_account(&mint, &program_id);
        let (multisig, _) = LaunchpadSeeds::multisig(&program_id);
        let (launchpad, _) = LaunchpadSeeds::launchpad(&program_id);
        assert_ne!(custody, custody_ta);
        assert_ne!(multisig, launchpad);
        assert_eq!(LaunchpadSeeds::custody(&mint, &program_id).0, custody);
    }
}
