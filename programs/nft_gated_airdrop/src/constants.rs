use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Fixed parameters of the airdrop. Nothing here can be changed after
 * deployment; the only per-airdrop values live in the Airdrop account.
 */

#[constant]
/// ===== CLAIM CONSTANTS =====

/// Amount transferred to each eligible claimant
/// - Expressed in whole tokens; on-chain it is scaled by the mint's decimals
/// - Identical for every member of the eligibility set
pub const CLAIM_AMOUNT: u64 = 100;

/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop PDA derivation
/// - Used in: ["airdrop", token_mint, owner, merkle_root]
/// - The root is part of the address, so an airdrop can never be re-rooted
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - The vault's token authority is the airdrop PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", airdrop_key, claimant_key]
/// - One record per (airdrop, claimant) pair
pub const CLAIM_SEED: &str = "claim";
