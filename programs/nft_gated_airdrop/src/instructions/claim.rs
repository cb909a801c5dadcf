use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine::{check_eligibility, settle_claim, EligibilityGate, Treasury};
use crate::error::*;
use crate::state::*;
use crate::utils::{whole_tokens, CredentialHolding, VaultLedger};

/**
 * Account context for claiming the airdrop
 *
 * The claimant proves membership with a merkle proof and credential ownership
 * with a token account of the credential mint. The claim record PDA makes the
 * claim at-most-once per claimant.
 *
 * Access Control: Any signer holding the credential and a valid proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The airdrop being claimed from
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Claim record for this claimant
    /// - Derived from: ["claim", airdrop_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the reward tokens
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the reward
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The reward token mint
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Claimant's token account of the credential mint
    /// - Omitted when the claimant holds no credential account at all
    pub credential_account: Option<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for claim record creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * @param ctx - The account context containing all required accounts
 * @param proof - Sibling hashes from the claimant's leaf up to the root
 *
 * Validation Process (order is fixed):
 * 1. Claimant holds the credential (NoCredential)
 * 2. Proof matches the airdrop's root (InvalidProof)
 * 3. Claim record not yet set (AlreadyClaimed)
 * 4. Vault holds CLAIM_AMOUNT whole tokens (InsufficientBalance)
 */
pub fn handle_claim(ctx: Context<Claim>, proof: Vec<[u8; 32]>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let airdrop = &ctx.accounts.airdrop;

    // ===== ELIGIBILITY PHASE =====

    let gate = EligibilityGate::new(CredentialHolding::new(
        airdrop.credential_mint,
        ctx.accounts.credential_account.as_ref(),
    ));
    check_eligibility(&gate, &claimant, &proof, &airdrop.merkle_root)?;

    // ===== SETTLEMENT PHASE =====

    let airdrop_key = airdrop.key();
    let token_mint_key = airdrop.token_mint;
    let owner_key = airdrop.owner;
    let merkle_root = airdrop.merkle_root;
    let airdrop_bump = airdrop.bump;

    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        merkle_root.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    let treasury = Treasury::new(
        airdrop_key,
        owner_key,
        VaultLedger {
            authority: ctx.accounts.airdrop.to_account_info(),
            vault: &ctx.accounts.token_vault,
            recipient: &ctx.accounts.claimant_token_account,
            mint: &ctx.accounts.token_mint,
            token_program: ctx.accounts.token_program.to_account_info(),
            signer_seeds: signer,
        },
    );
    let claim_amount = whole_tokens(CLAIM_AMOUNT, ctx.accounts.token_mint.decimals)?;
    let claimed = settle_claim(
        &treasury,
        &mut *ctx.accounts.claim_record,
        &claimant,
        claim_amount,
    )?;

    ctx.accounts.airdrop.record_claim(claimed.amount)?;

    emit_cpi!(claimed);

    Ok(())
}
