use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine::Treasury;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::VaultLedger;

/**
 * Account context for withdrawing the remaining tokens
 *
 * Access Control: Owner only (checked by the treasury)
 *
 * Business Logic:
 * - Can be called at any time, there is no claim window
 * - Moves the whole vault balance to the owner
 * - Leaves the airdrop and vault open; later deposits can still be claimed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawLeftover<'info> {
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault containing the remaining tokens
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the remaining tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The reward token mint
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Caller; must be the airdrop owner
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_withdraw_leftover(ctx: Context<WithdrawLeftover>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let airdrop_key = airdrop.key();
    let owner_key = airdrop.owner;
    let token_mint_key = airdrop.token_mint;
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
            recipient: &ctx.accounts.owner_token_account,
            mint: &ctx.accounts.token_mint,
            token_program: ctx.accounts.token_program.to_account_info(),
            signer_seeds: signer,
        },
    );
    let amount_withdrawn = treasury.withdraw_leftover(&ctx.accounts.owner.key())?;

    emit_cpi!(LeftoverWithdrawn {
        airdrop: airdrop_key,
        owner: owner_key,
        amount_withdrawn,
    });

    Ok(())
}
