use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Commitment build errors
    #[msg("Eligibility set is empty")]
    EmptySet,
    #[msg("Identity appears more than once in the eligibility set")]
    DuplicateEntry,

    // Claim errors, in the order the claim checks them
    #[msg("No NFT found")]
    NoCredential,
    #[msg("Address is invalid for claim")]
    InvalidProof,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("insufficient contract balance")]
    InsufficientBalance,

    // Access control and withdrawal errors
    #[msg("Only owner can perform this action")]
    NotOwner,
    #[msg("insufficient amount")]
    InsufficientAmount,

    // External collaborator errors
    #[msg("Credential registry query failed")]
    CredentialRegistryUnavailable,
    #[msg("Token ledger query failed")]
    TokenLedgerUnavailable,
    #[msg("Token holder not available to this ledger")]
    UnknownTokenHolder,

    // Account validation errors
    #[msg("Credential account does not match the credential mint")]
    CredentialMintMismatch,
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid amount")]
    InvalidAmount,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
