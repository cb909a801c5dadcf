use anchor_lang::prelude::*;

/// Fungible token ledger the airdrop draws its rewards from.
///
/// Balances are always read from the ledger; callers never cache them.
pub trait TokenLedger {
    fn balance_of(&self, holder: &Pubkey) -> Result<u64>;

    /// Moves `amount` from `from` to `to` as one check-and-debit step.
    ///
    /// Fails with `InsufficientBalance` when `from` holds less than `amount`.
    fn transfer(&self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Registry of the non-fungible credential that gates claiming.
pub trait CredentialRegistry {
    fn ownership_count(&self, identity: &Pubkey) -> Result<u64>;
}

impl<T: TokenLedger + ?Sized> TokenLedger for &T {
    fn balance_of(&self, holder: &Pubkey) -> Result<u64> {
        (**self).balance_of(holder)
    }

    fn transfer(&self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        (**self).transfer(from, to, amount)
    }
}

impl<T: CredentialRegistry + ?Sized> CredentialRegistry for &T {
    fn ownership_count(&self, identity: &Pubkey) -> Result<u64> {
        (**self).ownership_count(identity)
    }
}
