use anchor_lang::prelude::*;

use crate::engine::ClaimMark;

/**
 * Per-claimant claim record
 *
 * Derivation: ["claim", airdrop_key, claimant_key]
 *
 * Created (unclaimed) on the claimant's first claim attempt and flipped to
 * claimed by the first successful one. It is never closed, so the flag
 * cannot be reset.
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Whether this claimant already received the reward
    pub claimed: bool,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}

impl ClaimMark for ClaimRecord {
    fn is_claimed(&self) -> bool {
        self.claimed
    }

    fn mark_claimed(&mut self) {
        self.claimed = true;
    }
}
