use anchor_lang::prelude::*;

declare_id!("Xtt3DfaBpGQmAkW6wK4i8euUx7KdAWgoEZu4Vh3GDMg");

pub mod commitment;
pub mod constants;
pub mod engine;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * NFT-Gated Airdrop Program
 *
 * Pays a fixed reward of CLAIM_AMOUNT whole tokens (scaled by the reward
 * mint's decimals) once to every member of a pre-committed eligibility set
 * who also holds a credential token.
 *
 * Key Features:
 * - Merkle root committed at initialization and never changed
 * - Credential gate: the claimant must hold at least one credential token
 * - At-most-once claiming through a per-claimant claim record
 * - Owner-only balance inspection and leftover recovery
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: owner, mints, merkle root and running totals
 * - Token Vault PDA: holds the reward tokens, authority is the airdrop PDA
 * - Claim Record PDAs: one claimed flag per claimant
 *
 * Workflow:
 * 1. Eligibility tree built off-chain with `commitment::EligibilityTree`
 * 2. Owner initializes the airdrop with the tree's root
 * 3. Anyone funds the vault
 * 4. Members holding the credential claim with their proofs
 * 5. Owner withdraws whatever is left
 */
#[program]
pub mod nft_gated_airdrop {
    use super::*;

    /**
     * Creates a new airdrop
     *
     * @param ctx - Account context containing airdrop, vault, mints and owner accounts
     * @param merkle_root - Root of the eligibility tree
     *
     * Access Control: Any signer, who becomes the owner
     */
    pub fn initialize_airdrop(ctx: Context<InitializeAirdrop>, merkle_root: [u8; 32]) -> Result<()> {
        handle_initialize_airdrop(ctx, merkle_root)
    }

    /**
     * Deposits reward tokens into the vault
     *
     * @param ctx - Account context containing airdrop, vault and funder accounts
     * @param amount - Amount of tokens to deposit
     *
     * Access Control: Anyone
     */
    pub fn fund_airdrop(ctx: Context<FundAirdrop>, amount: u64) -> Result<()> {
        handle_fund_airdrop(ctx, amount)
    }

    /**
     * Claims the fixed reward with a merkle proof
     *
     * @param ctx - Account context containing airdrop, claim record, credential and token accounts
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Credential holders with a valid merkle proof, once each
     */
    pub fn claim(ctx: Context<Claim>, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, proof)
    }

    /**
     * Read-only eligibility check (credential + proof)
     *
     * Access Control: Anyone
     */
    pub fn can_claim(ctx: Context<CanClaim>, identity: Pubkey, proof: Vec<[u8; 32]>) -> Result<bool> {
        handle_can_claim(ctx, identity, proof)
    }

    /**
     * Returns the vault balance
     *
     * Access Control: Owner only
     */
    pub fn check_contract_balance(ctx: Context<CheckContractBalance>) -> Result<u64> {
        handle_check_contract_balance(ctx)
    }

    /**
     * Withdraws the whole vault balance to the owner
     *
     * Access Control: Owner only
     * Note: Fails when the vault is empty
     */
    pub fn withdraw_leftover(ctx: Context<WithdrawLeftover>) -> Result<()> {
        handle_withdraw_leftover(ctx)
    }
}
