use anchor_lang::prelude::*;

use super::TokenLedger;
use crate::error::AirdropError;

/**
 * Treasury accounting over an external token ledger
 *
 * `address` is the account whose holdings fund the airdrop (the vault
 * authority on-chain). The balance is queried from the ledger on every call.
 */
pub struct Treasury<L> {
    address: Pubkey,
    owner: Pubkey,
    ledger: L,
}

impl<L: TokenLedger> Treasury<L> {
    pub fn new(address: Pubkey, owner: Pubkey, ledger: L) -> Self {
        Self {
            address,
            owner,
            ledger,
        }
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Current holdings, owner only
    pub fn balance(&self, caller: &Pubkey) -> Result<u64> {
        self.require_owner(caller)?;
        self.holdings()
    }

    pub fn sufficient_for(&self, amount: u64) -> Result<bool> {
        Ok(self.holdings()? >= amount)
    }

    /// Pays `amount` out of the treasury.
    ///
    /// Sufficiency is checked before the ledger is touched; the ledger's own
    /// debit is still the final word when claims race on the same balance.
    pub fn transfer(&self, to: &Pubkey, amount: u64) -> Result<()> {
        require!(
            self.sufficient_for(amount)?,
            AirdropError::InsufficientBalance
        );
        self.ledger.transfer(&self.address, to, amount)
    }

    /// Sends the entire balance to the owner and returns the amount moved
    pub fn withdraw_leftover(&self, caller: &Pubkey) -> Result<u64> {
        self.require_owner(caller)?;

        let remaining = self.holdings()?;
        require!(remaining > 0, AirdropError::InsufficientAmount);

        self.ledger.transfer(&self.address, &self.owner, remaining)?;
        msg!("leftover withdrawn: owner={} amount={}", self.owner, remaining);
        Ok(remaining)
    }

    fn holdings(&self) -> Result<u64> {
        self.ledger.balance_of(&self.address)
    }

    fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, AirdropError::NotOwner);
        Ok(())
    }
}
