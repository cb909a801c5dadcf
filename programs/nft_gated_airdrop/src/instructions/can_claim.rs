use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::engine::{can_claim, EligibilityGate};
use crate::state::*;
use crate::utils::CredentialHolding;

/**
 * Account context for the read-only eligibility check
 *
 * Access Control: None, nothing is written
 */
#[derive(Accounts)]
pub struct CanClaim<'info> {
    pub airdrop: Account<'info, Airdrop>,

    /// Token account of the credential mint held by the identity being checked
    pub credential_account: Option<InterfaceAccount<'info, TokenAccount>>,
}

/**
 * Returns whether `identity` holds the credential and belongs to the tree
 *
 * Does not look at the claim record or the vault balance.
 */
pub fn handle_can_claim(
    ctx: Context<CanClaim>,
    identity: Pubkey,
    proof: Vec<[u8; 32]>,
) -> Result<bool> {
    let airdrop = &ctx.accounts.airdrop;
    let gate = EligibilityGate::new(CredentialHolding::new(
        airdrop.credential_mint,
        ctx.accounts.credential_account.as_ref(),
    ));
    can_claim(&gate, &identity, &proof, &airdrop.merkle_root)
}
