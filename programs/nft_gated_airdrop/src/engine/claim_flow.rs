use anchor_lang::prelude::*;

use super::{ClaimMark, CredentialRegistry, EligibilityGate, TokenLedger, Treasury};
use crate::error::AirdropError;
use crate::event::ClaimSucceeded;
use crate::utils::{hash_leaf, verify};

/// Eligibility in principle: holds the credential and is in the tree.
///
/// Says nothing about whether the identity already claimed or whether the
/// treasury could pay right now.
pub fn can_claim<R: CredentialRegistry>(
    gate: &EligibilityGate<R>,
    identity: &Pubkey,
    proof: &[[u8; 32]],
    merkle_root: &[u8; 32],
) -> Result<bool> {
    Ok(gate.holds_credential(identity)? && verify(proof, *merkle_root, hash_leaf(identity)))
}

/**
 * Claim steps 1-2: credential, then membership
 *
 * Both are read-only, so they run before the claimant's record is locked.
 */
pub fn check_eligibility<R: CredentialRegistry>(
    gate: &EligibilityGate<R>,
    claimant: &Pubkey,
    proof: &[[u8; 32]],
    merkle_root: &[u8; 32],
) -> Result<()> {
    require!(
        gate.holds_credential(claimant)?,
        AirdropError::NoCredential
    );
    require!(
        verify(proof, *merkle_root, hash_leaf(claimant)),
        AirdropError::InvalidProof
    );
    Ok(())
}

/**
 * Claim steps 3-5: claimed check, balance check, payout, mark
 *
 * The caller must hold `record` exclusively for the whole call (slot lock
 * off-chain, transaction write lock on-chain). Every check runs before any
 * state changes, and the record is only marked once the transfer succeeded,
 * so a failure at any step leaves both the record and the treasury untouched.
 */
pub fn settle_claim<L: TokenLedger, M: ClaimMark + ?Sized>(
    treasury: &Treasury<L>,
    record: &mut M,
    claimant: &Pubkey,
    amount: u64,
) -> Result<ClaimSucceeded> {
    require!(!record.is_claimed(), AirdropError::AlreadyClaimed);

    // Fails with InsufficientBalance before the ledger is debited
    treasury.transfer(claimant, amount)?;
    record.mark_claimed();

    msg!("claim succeeded: claimant={} amount={}", claimant, amount);
    Ok(ClaimSucceeded {
        claimant: *claimant,
        amount,
    })
}
