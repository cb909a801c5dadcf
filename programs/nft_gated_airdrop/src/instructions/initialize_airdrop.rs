use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing an airdrop
 *
 * Creates the airdrop PDA and its token vault. The merkle root is an
 * instruction argument and a seed of the airdrop address, so it is fixed for
 * the lifetime of the airdrop.
 *
 * Access Control: Any signer; the signer becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(merkle_root: [u8; 32])]
pub struct InitializeAirdrop<'info> {
    /// The airdrop account (PDA)
    /// - Derived from: ["airdrop", token_mint, owner, merkle_root]
    #[account(
        init,
        payer = owner,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            merkle_root.as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) that holds the reward tokens
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The reward token mint
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The credential mint claimants must hold
    /// - May belong to either token program
    pub credential_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the airdrop
    /// - Pays for account creation
    /// - Only identity allowed to check the balance and withdraw leftovers
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Initializes a new airdrop
 *
 * @param ctx - The account context containing all required accounts
 * @param merkle_root - Root of the eligibility tree built off-chain
 */
pub fn handle_initialize_airdrop(
    ctx: Context<InitializeAirdrop>,
    merkle_root: [u8; 32],
) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.initialize(
        ctx.bumps.airdrop,
        ctx.accounts.owner.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.key(),
        ctx.accounts.credential_mint.key(),
        merkle_root,
    )?;

    let airdrop_key = airdrop.key();

    emit_cpi!(AirdropInitialized {
        airdrop: airdrop_key,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        credential_mint: ctx.accounts.credential_mint.key(),
        merkle_root,
    });

    Ok(())
}
