use anchor_lang::prelude::*;

use crate::error::AirdropError;

/**
 * Airdrop state account
 *
 * Holds the immutable parameters of one airdrop and its running totals.
 *
 * Derivation: ["airdrop", token_mint, owner, merkle_root]
 *
 * Lifecycle:
 * 1. Created by initialize_airdrop, root and owner fixed from then on
 * 2. total_deposited grows with each fund_airdrop
 * 3. total_claimed grows with each successful claim
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Owner of the airdrop
    /// - Can inspect the vault balance and withdraw leftovers
    pub owner: Pubkey,

    /// Mint of the reward token
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the tokens to be distributed
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Mint of the credential a claimant must hold at least one of
    pub credential_mint: Pubkey,

    /// Root of the eligibility tree
    /// - Also a seed of this account, so it can never change
    pub merkle_root: [u8; 32],

    /// Tokens deposited through fund_airdrop
    /// - Direct transfers into the vault are not counted here
    pub total_deposited: u64,

    /// Tokens paid out to claimants
    pub total_claimed: u64,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Fixes the airdrop's parameters; an all-zero root is rejected
    pub fn initialize(
        &mut self,
        bump: u8,
        owner: Pubkey,
        token_mint: Pubkey,
        token_vault: Pubkey,
        credential_mint: Pubkey,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        // An all-zero root cannot come out of the commitment builder
        require!(merkle_root != [0; 32], AirdropError::InvalidMerkleRoot);

        self.bump = bump;
        self.owner = owner;
        self.token_mint = token_mint;
        self.token_vault = token_vault;
        self.credential_mint = credential_mint;
        self.merkle_root = merkle_root;
        // Note: total_deposited and total_claimed start at 0
        Ok(())
    }

    /// Adds a deposit to total_deposited and returns the new total
    pub fn record_deposit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, AirdropError::InvalidAmount);

        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        Ok(self.total_deposited)
    }

    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        Ok(())
    }
}
