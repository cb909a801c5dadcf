use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::constants::*;
use crate::error::*;
use crate::state::*;

/**
 * Account context for reading the vault balance
 *
 * Access Control: Owner only
 */
#[derive(Accounts)]
pub struct CheckContractBalance<'info> {
    pub airdrop: Account<'info, Airdrop>,

    /// Derived from: ["vault", airdrop_key]
    #[account(
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(constraint = owner.key() == airdrop.owner @ AirdropError::NotOwner)]
    pub owner: Signer<'info>,
}

pub fn handle_check_contract_balance(ctx: Context<CheckContractBalance>) -> Result<u64> {
    Ok(ctx.accounts.token_vault.amount)
}
