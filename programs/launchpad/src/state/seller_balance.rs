//! Seller proceeds held in a custody vault

use anchor_lang::prelude::*;

use crate::{error::LaunchpadError, utils::SafeMath};

#[account]
#[derive(Default, Debug)]
pub struct SellerBalance {
    pub owner: Pubkey,
    pub custody: Pubkey,
    pub balance: u64,
    pub bump: u8,
}

impl SellerBalance {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;

    pub fn bind(&mut self, owner: Pubkey, custody: Pubkey, bump: u8) -> Result<()> {
        if self.owner != Pubkey::default() {
            require_keys_eq!(self.owner, owner, LaunchpadError::Unauthorized);
            require_keys_eq!(self.custody, custody, LaunchpadError::Unauthorized);
            return Ok(());
        }
        self.owner = owner;
        self.custody = custody;
        self.balance = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self.balance.safe_add(amount)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, LaunchpadError::InsufficientFunds);
        self.balance -= amount;
        Ok(())
    }
}
