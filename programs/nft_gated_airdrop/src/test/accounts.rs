use anchor_lang::prelude::*;
use anchor_spl::token::spl_token;
use anchor_spl::token::spl_token::solana_program::program_option::COption;
use anchor_spl::token::spl_token::solana_program::program_pack::Pack;
use anchor_spl::token::spl_token::state::AccountState;
use anchor_spl::token_interface::{Mint, TokenAccount};

/// Account owned by `program_owner`, leaked so it can back `'static` wrappers
pub fn leak_account_info(
    key: Pubkey,
    program_owner: Pubkey,
    data: Vec<u8>,
) -> &'static AccountInfo<'static> {
    let key: &'static Pubkey = Box::leak(Box::new(key));
    let program_owner: &'static Pubkey = Box::leak(Box::new(program_owner));
    let lamports: &'static mut u64 = Box::leak(Box::new(1_000_000_000));
    let data: &'static mut [u8] = Box::leak(data.into_boxed_slice());
    Box::leak(Box::new(AccountInfo::new(
        key,
        false,
        true,
        lamports,
        data,
        program_owner,
        false,
        0,
    )))
}

/// SPL token account of `mint` held by `owner`
pub fn token_account(
    key: Pubkey,
    mint: Pubkey,
    owner: Pubkey,
    amount: u64,
) -> InterfaceAccount<'static, TokenAccount> {
    let state = spl_token::state::Account {
        mint,
        owner,
        amount,
        delegate: COption::None,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Account::LEN];
    spl_token::state::Account::pack(state, &mut data).unwrap();

    InterfaceAccount::try_from(leak_account_info(key, spl_token::ID, data)).unwrap()
}

/// SPL mint with `decimals` and no authorities
pub fn mint_account(key: Pubkey, decimals: u8) -> InterfaceAccount<'static, Mint> {
    let state = spl_token::state::Mint {
        mint_authority: COption::None,
        supply: 0,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(state, &mut data).unwrap();

    InterfaceAccount::try_from(leak_account_info(key, spl_token::ID, data)).unwrap()
}
