use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, Mint, TokenAccount, TransferChecked};

use crate::engine::TokenLedger;
use crate::error::AirdropError;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(token_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Converts a whole-token amount into base units of a mint with `decimals`
pub fn whole_tokens(amount: u64, decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(u32::from(decimals))
        .and_then(|unit| amount.checked_mul(unit))
        .ok_or_else(|| error!(AirdropError::ArithmeticOverflow))
}

/**
 * Token ledger backed by the airdrop's vault
 *
 * The airdrop PDA (`authority`) is the treasury identity; its holdings are the
 * vault's balance. Only the one recipient account passed to the instruction
 * can be paid, so the ledger refuses any other destination.
 */
pub struct VaultLedger<'a, 'info> {
    pub authority: AccountInfo<'info>,
    pub vault: &'a InterfaceAccount<'info, TokenAccount>,
    pub recipient: &'a InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> TokenLedger for VaultLedger<'a, 'info> {
    fn balance_of(&self, holder: &Pubkey) -> Result<u64> {
        if holder == self.authority.key {
            Ok(self.vault.amount)
        } else if *holder == self.recipient.owner {
            Ok(self.recipient.amount)
        } else {
            err!(AirdropError::UnknownTokenHolder)
        }
    }

    fn transfer(&self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*from, *self.authority.key, AirdropError::UnknownTokenHolder);
        require_keys_eq!(*to, self.recipient.owner, AirdropError::UnknownTokenHolder);
        require!(
            self.vault.amount >= amount,
            AirdropError::InsufficientBalance
        );

        transfer_token(
            self.authority.clone(),
            self.vault.to_account_info(),
            self.recipient.to_account_info(),
            self.mint.to_account_info(),
            self.token_program.clone(),
            amount,
            self.mint.decimals,
            Some(self.signer_seeds), // PDA signing for the vault authority
        )
    }
}
