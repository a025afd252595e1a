mod common;

use anchor_lang::prelude::*;
use common::assert_launchpad_error;
use launchpad::error::LaunchpadError;
use launchpad::state::{AdminInstruction, Multisig, MultisigStatus};

fn multisig(n: usize, min: u8) -> (Multisig, Vec<Pubkey>) {
    let signers: Vec<Pubkey> = (0..n).map(|_| Pubkey::new_unique()).collect();
    let mut multisig = Multisig::default();
    multisig.initialize(&signers, min, 255).unwrap();
    (multisig, signers)
}

fn hash_of(time: i64) -> (u64, u8, u16) {
    let keys = [Pubkey::new_unique(), Pubkey::new_unique()];
    Multisig::instruction_hash(&keys, AdminInstruction::SetTestTime, &time).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_of_three_executes_on_second_signature() {
        let (mut multisig, signers) = multisig(3, 2);
        let (hash, accounts, data) = hash_of(5);

        let left = multisig.sign_and_execute(&signers[0], hash, accounts, data).unwrap();
        assert_eq!(left, 1);
        assert_eq!(multisig.status, MultisigStatus::Proposed);
        assert_eq!(multisig.instruction_hash, hash);

        let left = multisig.sign_and_execute(&signers[1], hash, accounts, data).unwrap();
        assert_eq!(left, 0);

        // Executed and reset
        assert_eq!(multisig.status, MultisigStatus::Idle);
        assert_eq!(multisig.num_signed, 0);
        assert!(multisig.signed.iter().all(|s| !s));
    }

    #[test]
    fn test_single_signer_executes_immediately() {
        let (mut multisig, signers) = multisig(1, 1);
        let (hash, accounts, data) = hash_of(7);
        assert_eq!(multisig.sign_and_execute(&signers[0], hash, accounts, data).unwrap(), 0);
        assert_eq!(multisig.status, MultisigStatus::Idle);
    }

    #[test]
    fn test_unknown_signer_rejected() {
        let (mut multisig, _) = multisig(2, 2);
        let (hash, accounts, data) = hash_of(1);
        multisig.propose(hash, accounts, data).unwrap();
        assert_launchpad_error(
            multisig.approve(&Pubkey::new_unique()),
            LaunchpadError::UnknownSigner,
        );
        assert_eq!(multisig.num_signed, 0);
    }

    #[test]
    fn test_double_signing_rejected() {
        let (mut multisig, signers) = multisig(3, 3);
        let (hash, accounts, data) = hash_of(1);
        multisig.sign_and_execute(&signers[2], hash, accounts, data).unwrap();
        assert_launchpad_error(
            multisig.sign_and_execute(&signers[2], hash, accounts, data),
            LaunchpadError::AlreadySigned,
        );
        assert_eq!(multisig.num_signed, 1);
    }

    #[test]
    fn test_different_instruction_while_pending() {
        let (mut multisig, signers) = multisig(3, 2);
        let (first, accounts, data) = hash_of(1);
        let (second, _, _) = hash_of(2);
        multisig.sign_and_execute(&signers[0], first, accounts, data).unwrap();
        assert_launchpad_error(
            multisig.sign_and_execute(&signers[1], second, accounts, data),
            LaunchpadError::AlreadyPending,
        );
        // The original proposal keeps its approval
        assert_eq!(multisig.instruction_hash, first);
        assert_eq!(multisig.num_signed, 1);
    }

    #[test]
    fn test_cancel_unblocks_new_proposal() {
        let (mut multisig, signers) = multisig(3, 2);
        let (first, accounts, data) = hash_of(1);
        let (second, _, _) = hash_of(2);
        multisig.sign_and_execute(&signers[0], first, accounts, data).unwrap();

        assert_launchpad_error(multisig.cancel(&Pubkey::new_unique()), LaunchpadError::UnknownSigner);
        multisig.cancel(&signers[2]).unwrap();
        assert_eq!(multisig.status, MultisigStatus::Idle);

        assert_eq!(multisig.sign_and_execute(&signers[1], second, accounts, data).unwrap(), 1);
        assert_eq!(multisig.instruction_hash, second);
    }

    #[test]
    fn test_execute_requires_quorum() {
        let (mut multisig, signers) = multisig(3, 2);
        let (hash, accounts, data) = hash_of(1);
        multisig.propose(hash, accounts, data).unwrap();
        multisig.approve(&signers[0]).unwrap();
        assert_launchpad_error(multisig.execute(hash), LaunchpadError::ThresholdNotMet);

        multisig.approve(&signers[1]).unwrap();
        assert_launchpad_error(multisig.execute(hash ^ 1), LaunchpadError::ThresholdNotMet);
        multisig.execute(hash).unwrap();

        // Exactly one execution per approval round
        assert_launchpad_error(multisig.execute(hash), LaunchpadError::ThresholdNotMet);
    }

    #[test]
    fn test_second_initialize_fails() {
        let (mut multisig, signers) = multisig(2, 1);
        assert_launchpad_error(
            multisig.initialize(&signers, 1, 255),
            LaunchpadError::AlreadyInitialized,
        );
    }

    #[test]
    fn test_signer_set_validation() {
        let (mut multisig, signers) = multisig(2, 2);
        let seven: Vec<Pubkey> = (0..7).map(|_| Pubkey::new_unique()).collect();

        assert_launchpad_error(multisig.set_signers(&[], 1), LaunchpadError::InvalidSignerSet);
        assert_launchpad_error(multisig.set_signers(&seven, 1), LaunchpadError::InvalidSignerSet);
        assert_launchpad_error(
            multisig.set_signers(&[signers[0], signers[0]], 1),
            LaunchpadError::InvalidSignerSet,
        );
        assert_launchpad_error(
            multisig.set_signers(&[signers[0], Pubkey::default()], 1),
            LaunchpadError::InvalidSignerSet,
        );
        assert_launchpad_error(multisig.set_signers(&signers, 3), LaunchpadError::InvalidSignerSet);
        assert_launchpad_error(multisig.set_signers(&signers, 0), LaunchpadError::InvalidSignerSet);

        // Unchanged after failures
        assert_eq!(multisig.num_signers, 2);
        assert_eq!(multisig.min_signatures, 2);
    }

    #[test]
    fn test_lowering_threshold_drops_pending() {
        let (mut multisig, signers) = multisig(3, 3);
        let (hash, accounts, data) = hash_of(1);
        multisig.sign_and_execute(&signers[0], hash, accounts, data).unwrap();

        multisig.set_threshold(1).unwrap();
        assert_eq!(multisig.min_signatures, 1);
        assert_eq!(multisig.status, MultisigStatus::Idle);
        assert_eq!(multisig.sign_and_execute(&signers[1], hash, accounts, data).unwrap(), 0);
    }

    #[test]
    fn test_sign_instruction_hashes_accounts() {
        let (mut multisig, signers) = multisig(2, 2);
        let keys = [Pubkey::new_unique(), Pubkey::new_unique()];
        let owner = Pubkey::new_unique();
        let mut lamports = [0u64; 2];
        let mut data: [Vec<u8>; 2] = [vec![], vec![]];
        let [l0, l1] = &mut lamports;
        let [d0, d1] = &mut data;
        let infos = [
            AccountInfo::new(&keys[0], false, true, l0, d0, &owner, false, 0),
            AccountInfo::new(&keys[1], false, false, l1, d1, &owner, false, 0),
        ];

        let left = multisig
            .sign_instruction(&signers[0], &infos, AdminInstruction::SetTestTime, &42i64)
            .unwrap();
        assert_eq!(left, 1);
        let (expected, accounts, data_len) =
            Multisig::instruction_hash(&keys, AdminInstruction::SetTestTime, &42i64).unwrap();
        assert_eq!(multisig.instruction_hash, expected);
        assert_eq!(multisig.instruction_accounts_len, accounts);
        assert_eq!(multisig.instruction_data_len, data_len);

        // Same call with different params is a different instruction
        assert_launchpad_error(
            multisig.sign_instruction(&signers[1], &infos, AdminInstruction::SetTestTime, &43i64),
            LaunchpadError::AlreadyPending,
        );
        let left = multisig
            .sign_instruction(&signers[1], &infos, AdminInstruction::SetTestTime, &42i64)
            .unwrap();
        assert_eq!(left, 0);
    }
}
