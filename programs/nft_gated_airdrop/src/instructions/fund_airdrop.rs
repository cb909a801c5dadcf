use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for depositing reward tokens
 *
 * Access Control: Anyone can fund an airdrop
 */
#[event_cpi]
#[derive(Accounts)]
pub struct FundAirdrop<'info> {
    /// The airdrop being funded
    /// - Will be modified to update total_deposited
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault receiving the deposit
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The reward token mint
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Funder's token account the deposit is taken from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    pub funder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_fund_airdrop(ctx: Context<FundAirdrop>, amount: u64) -> Result<()> {
    // Zero deposits fail before any tokens move
    let total_deposited = ctx.accounts.airdrop.record_deposit(amount)?;
    let airdrop_key = ctx.accounts.airdrop.key();

    transfer_token(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // Funder signs the transaction
    )?;

    emit_cpi!(AirdropFunded {
        airdrop: airdrop_key,
        funder: ctx.accounts.funder.key(),
        amount,
        total_deposited,
    });

    Ok(())
}
