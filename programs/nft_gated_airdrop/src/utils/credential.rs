use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::engine::CredentialRegistry;
use crate::error::AirdropError;

/**
 * Credential registry backed by a token account of the credential mint
 *
 * The ownership count of an identity is the balance of its credential token
 * account. A missing account, or one held by somebody else, counts as zero.
 */
pub struct CredentialHolding<'a, 'info> {
    credential_mint: Pubkey,
    account: Option<&'a InterfaceAccount<'info, TokenAccount>>,
}

impl<'a, 'info> CredentialHolding<'a, 'info> {
    pub fn new(
        credential_mint: Pubkey,
        account: Option<&'a InterfaceAccount<'info, TokenAccount>>,
    ) -> Self {
        Self {
            credential_mint,
            account,
        }
    }
}

impl<'a, 'info> CredentialRegistry for CredentialHolding<'a, 'info> {
    fn ownership_count(&self, identity: &Pubkey) -> Result<u64> {
        let Some(account) = self.account else {
            return Ok(0);
        };

        require_keys_eq!(
            account.mint,
            self.credential_mint,
            AirdropError::CredentialMintMismatch
        );
        if account.owner != *identity {
            return Ok(0);
        }
        Ok(account.amount)
    }
}
