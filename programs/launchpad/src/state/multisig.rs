//! Multisig approval gate
//!
//! Holds the designated admin signers and the single pending administrative
//! instruction. A pending instruction moves Idle -> Proposed -> Approved and
//! is executed (and reset to Idle) by the call that observes quorum.

use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::{
    constants::MAX_SIGNERS,
    error::LaunchpadError,
    events::{MultisigApproved, MultisigExecuted},
    utils::SafeMath,
};

/// Administrative instructions that must pass the multisig gate.
/// The tag is part of the instruction hash, so values are append-only.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminInstruction {
    SetAdminSigners = 0,
    SetFees = 1,
    SetPermissions = 2,
    InitCustody = 3,
    SetOracleConfig = 4,
    SetTestOraclePrice = 5,
    SetTestTime = 6,
    WithdrawFees = 7,
    WithdrawSolFees = 8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MultisigStatus {
    #[default]
    Idle,
    /// An instruction is recorded and collecting approvals
    Proposed,
    /// Quorum reached; the next matching execute commits it
    Approved,
}

#[account]
#[derive(Default, Debug)]
pub struct Multisig {
    pub num_signers: u8,
    pub num_signed: u8,
    pub min_signatures: u8,
    pub instruction_accounts_len: u8,
    pub instruction_data_len: u16,
    pub instruction_hash: u64,
    pub signers: [Pubkey; MAX_SIGNERS],
    pub signed: [bool; MAX_SIGNERS],
    pub status: MultisigStatus,
    pub bump: u8,
}

impl Multisig {
    pub const LEN: usize = 8 + // discriminator
        1 + // num_signers
        1 + // num_signed
        1 + // min_signatures
        1 + // instruction_accounts_len
        2 + // instruction_data_len
        8 + // instruction_hash
        32 * MAX_SIGNERS + // signers
        MAX_SIGNERS + // signed
        1 + // status
        1; // bump

    pub fn is_initialized(&self) -> bool {
        self.num_signers > 0
    }

    pub fn initialize(&mut self, signers: &[Pubkey], min_signatures: u8, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), LaunchpadError::AlreadyInitialized);
        self.set_signers(signers, min_signatures)?;
        self.bump = bump;
        Ok(())
    }

    /// Replace the signer set and threshold. Any pending instruction is dropped.
    pub fn set_signers(&mut self, signers: &[Pubkey], min_signatures: u8) -> Result<()> {
        require!(
            !signers.is_empty() && signers.len() <= MAX_SIGNERS,
            LaunchpadError::InvalidSignerSet
        );
        for (i, signer) in signers.iter().enumerate() {
            require!(*signer != Pubkey::default(), LaunchpadError::InvalidSignerSet);
            require!(
                !signers[..i].contains(signer),
                LaunchpadError::InvalidSignerSet
            );
        }
        require!(
            min_signatures >= 1 && min_signatures as usize <= signers.len(),
            LaunchpadError::InvalidSignerSet
        );

        self.signers = [Pubkey::default(); MAX_SIGNERS];
        self.signers[..signers.len()].copy_from_slice(signers);
        self.num_signers = signers.len() as u8;
        self.min_signatures = min_signatures;
        self.reset_pending();
        Ok(())
    }

    pub fn set_threshold(&mut self, min_signatures: u8) -> Result<()> {
        require!(
            min_signatures >= 1 && min_signatures <= self.num_signers,
            LaunchpadError::InvalidSignerSet
        );
        self.min_signatures = min_signatures;
        self.reset_pending();
        Ok(())
    }

    pub fn signer_index(&self, signer: &Pubkey) -> Result<usize> {
        self.signers[..self.num_signers as usize]
            .iter()
            .position(|s| s == signer)
            .ok_or_else(|| LaunchpadError::UnknownSigner.into())
    }

    /// Record a new pending instruction. Re-proposing the pending one is a no-op.
    pub fn propose(&mut self, instruction_hash: u64, accounts_len: u8, data_len: u16) -> Result<()> {
        match self.status {
            MultisigStatus::Idle => {
                self.reset_pending();
                self.instruction_hash = instruction_hash;
                self.instruction_accounts_len = accounts_len;
                self.instruction_data_len = data_len;
                self.status = MultisigStatus::Proposed;
                Ok(())
            }
            MultisigStatus::Proposed | MultisigStatus::Approved => {
                require!(
                    self.instruction_hash == instruction_hash
                        && self.instruction_accounts_len == accounts_len
                        && self.instruction_data_len == data_len,
                    LaunchpadError::AlreadyPending
                );
                Ok(())
            }
        }
    }

    /// Approve the pending instruction; returns the number of approvals still missing
    pub fn approve(&mut self, signer: &Pubkey) -> Result<u8> {
        require!(
            self.status != MultisigStatus::Idle,
            LaunchpadError::NoPendingInstruction
        );
        let index = self.signer_index(signer)?;
        require!(!self.signed[index], LaunchpadError::AlreadySigned);

        self.signed[index] = true;
        self.num_signed = self.num_signed.safe_add(1)?;
        if self.num_signed >= self.min_signatures {
            self.status = MultisigStatus::Approved;
        }
        Ok(self.min_signatures.saturating_sub(self.num_signed))
    }

    /// Authorize exactly one execution of the pending instruction
    pub fn execute(&mut self, instruction_hash: u64) -> Result<()> {
        require!(
            self.status == MultisigStatus::Approved
                && self.instruction_hash == instruction_hash
                && self.num_signed >= self.min_signatures,
            LaunchpadError::ThresholdNotMet
        );
        self.reset_pending();
        Ok(())
    }

    /// Withdraw the pending instruction. Any designated signer may cancel.
    pub fn cancel(&mut self, signer: &Pubkey) -> Result<()> {
        self.signer_index(signer)?;
        require!(
            self.status != MultisigStatus::Idle,
            LaunchpadError::NoPendingInstruction
        );
        self.reset_pending();
        Ok(())
    }

    /// Propose (if idle), approve for `signer` and execute once quorum is
    /// observed. Returns the number of signatures still required; zero means
    /// the caller must apply the guarded mutation now.
    pub fn sign_and_execute(
        &mut self,
        signer: &Pubkey,
        instruction_hash: u64,
        accounts_len: u8,
        data_len: u16,
    ) -> Result<u8> {
        self.propose(instruction_hash, accounts_len, data_len)?;
        let signatures_left = self.approve(signer)?;
        if signatures_left == 0 {
            self.execute(instruction_hash)?;
        }
        Ok(signatures_left)
    }

    pub fn reset_pending(&mut self) {
        self.num_signed = 0;
        self.signed = [false; MAX_SIGNERS];
        self.instruction_hash = 0;
        self.instruction_accounts_len = 0;
        self.instruction_data_len = 0;
        self.status = MultisigStatus::Idle;
    }

    /// Content hash of an administrative call: account keys, instruction tag
    /// and Borsh-encoded params. Returns `(hash, accounts_len, data_len)`.
    pub fn instruction_hash<T: AnchorSerialize>(
        keys: &[Pubkey],
        instruction: AdminInstruction,
        params: &T,
    ) -> Result<(u64, u8, u16)> {
        let mut data = vec![instruction as u8];
        params
            .serialize(&mut data)
            .map_err(|_| LaunchpadError::InvalidArgument)?;

        let mut chunks: Vec<&[u8]> = keys.iter().map(|k| k.as_ref()).collect();
        chunks.push(&data);
        let digest = hashv(&chunks).to_bytes();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);

        let accounts_len = u8::try_from(keys.len()).map_err(|_| LaunchpadError::MathOverflow)?;
        let data_len = u16::try_from(data.len()).map_err(|_| LaunchpadError::MathOverflow)?;
        Ok((u64::from_le_bytes(head), accounts_len, data_len))
    }

    /// Run the approval gate for a guarded instruction using its account list
    pub fn sign_instruction<T: AnchorSerialize>(
        &mut self,
        signer: &Pubkey,
        accounts: &[AccountInfo],
        instruction: AdminInstruction,
        params: &T,
    ) -> Result<u8> {
        let keys: Vec<Pubkey> = accounts.iter().map(|a| *a.key).collect();
        let (hash, accounts_len, data_len) = Self::instruction_hash(&keys, instruction, params)?;
        let signatures_left = self.sign_and_execute(signer, hash, accounts_len, data_len)?;
        if signatures_left > 0 {
            msg!(
                "Instruction {:?} approved by {}, {} signature(s) left",
                instruction,
                signer,
                signatures_left
            );
            emit!(MultisigApproved {
                signer: *signer,
                instruction_hash: hash,
                signatures_left,
            });
        } else {
            msg!("Instruction {:?} executed", instruction);
            emit!(MultisigExecuted {
                signer: *signer,
                instruction: instruction as u8,
            });
        }
        Ok(signatures_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multisig_with(n: usize, min: u8) -> (Multisig, Vec<Pubkey>) {
        let signers: Vec<Pubkey> = (0..n).map(|_| Pubkey::new_unique()).collect();
        let mut multisig = Multisig::default();
        multisig.initialize(&signers, min, 255).unwrap();
        (multisig, signers)
    }

    #[test]
    fn test_status_follows_approvals() {
        let (mut multisig, signers) = multisig_with(3, 2);
        multisig.propose(42, 3, 10).unwrap();
        assert_eq!(multisig.status, MultisigStatus::Proposed);
        assert_eq!(multisig.approve(&signers[0]).unwrap(), 1);
        assert_eq!(multisig.status, MultisigStatus::Proposed);
        assert_eq!(multisig.approve(&signers[2]).unwrap(), 0);
        assert_eq!(multisig.status, MultisigStatus::Approved);
        multisig.execute(42).unwrap();
        assert_eq!(multisig.status, MultisigStatus::Idle);
    }

    #[test]
    fn test_hash_depends_on_params() {
        let keys = [Pubkey::new_unique(), Pubkey::new_unique()];
        let (a, len, _) = Multisig::instruction_hash(&keys, AdminInstruction::SetTestTime, &1i64).unwrap();
        let (b, _, _) = Multisig::instruction_hash(&keys, AdminInstruction::SetTestTime, &2i64).unwrap();
        let (c, _, _) = Multisig::instruction_hash(&keys, AdminInstruction::WithdrawFees, &1i64).unwrap();
        assert_eq!(len, 2);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
