use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is initialized
#[event]
pub struct AirdropInitialized {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner of the airdrop
    pub owner: Pubkey,
    /// Reward token mint
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Mint of the credential a claimant must hold
    pub credential_mint: Pubkey,
    /// Root of the eligibility tree
    pub merkle_root: [u8; 32],
}

/// Event emitted when tokens are deposited into the vault
#[event]
pub struct AirdropFunded {
    pub airdrop: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    /// Total deposited through fund_airdrop so far
    pub total_deposited: u64,
}

/// Event emitted when a claimant receives the reward
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSucceeded {
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount of tokens transferred
    pub amount: u64,
}

/// Event emitted when the owner recovers the remaining balance
#[event]
pub struct LeftoverWithdrawn {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner who received the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount_withdrawn: u64,
}
