use anchor_lang::prelude::*;
use anchor_spl::token::spl_token;
use anchor_spl::token_interface::TokenAccount;

use crate::commitment::EligibilityTree;
use crate::engine::{check_eligibility, CredentialRegistry, EligibilityGate, TokenLedger};
use crate::error::AirdropError;
use crate::state::Airdrop;
use crate::test::accounts::{leak_account_info, mint_account, token_account};
use crate::test::fakes::{assert_airdrop_error, identity};
use crate::utils::{whole_tokens, CredentialHolding, VaultLedger};

const AIRDROP: u8 = 70;
const VAULT: u8 = 71;
const REWARD_MINT: u8 = 72;
const CREDENTIAL_MINT: u8 = 73;
const CREDENTIAL_ACCOUNT: u8 = 74;
const RECIPIENT_ACCOUNT: u8 = 75;
const CLAIMER: u8 = 1;
const OTHER: u8 = 2;

fn credential(holder: u8, mint: u8, amount: u64) -> InterfaceAccount<'static, TokenAccount> {
    token_account(
        identity(CREDENTIAL_ACCOUNT),
        identity(mint),
        identity(holder),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_account_counts_as_zero() {
        let holding = CredentialHolding::new(identity(CREDENTIAL_MINT), None);
        assert_eq!(holding.ownership_count(&identity(CLAIMER)).unwrap(), 0);

        let tree = EligibilityTree::build(&[identity(CLAIMER), identity(OTHER)]).unwrap();
        let gate = EligibilityGate::new(holding);
        assert_airdrop_error(
            check_eligibility(
                &gate,
                &identity(CLAIMER),
                &tree.proof(&identity(CLAIMER)).unwrap(),
                &tree.root(),
            ),
            AirdropError::NoCredential,
        );
    }

    #[test]
    fn test_credential_account_counts_holdings() {
        let account = credential(CLAIMER, CREDENTIAL_MINT, 2);
        let holding = CredentialHolding::new(identity(CREDENTIAL_MINT), Some(&account));

        assert_eq!(holding.ownership_count(&identity(CLAIMER)).unwrap(), 2);

        let tree = EligibilityTree::build(&[identity(CLAIMER), identity(OTHER)]).unwrap();
        let gate = EligibilityGate::new(holding);
        check_eligibility(
            &gate,
            &identity(CLAIMER),
            &tree.proof(&identity(CLAIMER)).unwrap(),
            &tree.root(),
        )
        .unwrap();
    }

    #[test]
    fn test_credential_account_of_another_holder_counts_as_zero() {
        let account = credential(OTHER, CREDENTIAL_MINT, 1);
        let holding = CredentialHolding::new(identity(CREDENTIAL_MINT), Some(&account));

        assert_eq!(holding.ownership_count(&identity(CLAIMER)).unwrap(), 0);
        assert_eq!(holding.ownership_count(&identity(OTHER)).unwrap(), 1);
    }

    #[test]
    fn test_credential_account_of_wrong_mint_fails() {
        let account = credential(CLAIMER, REWARD_MINT, 1);
        let holding = CredentialHolding::new(identity(CREDENTIAL_MINT), Some(&account));

        assert_airdrop_error(
            holding.ownership_count(&identity(CLAIMER)),
            AirdropError::CredentialMintMismatch,
        );
    }

    #[test]
    fn test_vault_ledger_knows_only_its_accounts() {
        let vault = token_account(identity(VAULT), identity(REWARD_MINT), identity(AIRDROP), 500);
        let recipient = token_account(
            identity(RECIPIENT_ACCOUNT),
            identity(REWARD_MINT),
            identity(CLAIMER),
            7,
        );
        let mint = mint_account(identity(REWARD_MINT), 0);
        let authority = leak_account_info(identity(AIRDROP), crate::ID, Vec::new());
        let token_program = leak_account_info(spl_token::ID, Pubkey::default(), Vec::new());
        let signer_seeds: &[&[&[u8]]] = &[];

        let ledger = VaultLedger {
            authority: authority.clone(),
            vault: &vault,
            recipient: &recipient,
            mint: &mint,
            token_program: token_program.clone(),
            signer_seeds,
        };

        assert_eq!(ledger.balance_of(&identity(AIRDROP)).unwrap(), 500);
        assert_eq!(ledger.balance_of(&identity(CLAIMER)).unwrap(), 7);
        assert_airdrop_error(
            ledger.balance_of(&identity(OTHER)),
            AirdropError::UnknownTokenHolder,
        );

        // Rejected before any CPI is attempted
        assert_airdrop_error(
            ledger.transfer(&identity(AIRDROP), &identity(OTHER), 100),
            AirdropError::UnknownTokenHolder,
        );
        assert_airdrop_error(
            ledger.transfer(&identity(CLAIMER), &identity(CLAIMER), 1),
            AirdropError::UnknownTokenHolder,
        );
        assert_airdrop_error(
            ledger.transfer(&identity(AIRDROP), &identity(CLAIMER), 501),
            AirdropError::InsufficientBalance,
        );
    }

    #[test]
    fn test_initialize_rejects_zero_root() {
        let mut airdrop = Airdrop::default();

        assert_airdrop_error(
            airdrop.initialize(
                255,
                identity(CLAIMER),
                identity(REWARD_MINT),
                identity(VAULT),
                identity(CREDENTIAL_MINT),
                [0; 32],
            ),
            AirdropError::InvalidMerkleRoot,
        );
        assert_eq!(airdrop.owner, Pubkey::default());

        let root = EligibilityTree::build(&[identity(CLAIMER)]).unwrap().root();
        airdrop
            .initialize(
                255,
                identity(CLAIMER),
                identity(REWARD_MINT),
                identity(VAULT),
                identity(CREDENTIAL_MINT),
                root,
            )
            .unwrap();
        assert_eq!(airdrop.merkle_root, root);
        assert_eq!(airdrop.credential_mint, identity(CREDENTIAL_MINT));
        assert_eq!(airdrop.total_deposited, 0);
    }

    #[test]
    fn test_deposit_totals() {
        let mut airdrop = Airdrop::default();

        assert_airdrop_error(airdrop.record_deposit(0), AirdropError::InvalidAmount);
        assert_eq!(airdrop.record_deposit(600).unwrap(), 600);
        assert_eq!(airdrop.record_deposit(400).unwrap(), 1_000);

        airdrop.total_deposited = u64::MAX;
        assert_airdrop_error(airdrop.record_deposit(1), AirdropError::ArithmeticOverflow);

        airdrop.record_claim(100).unwrap();
        assert_eq!(airdrop.total_claimed, 100);
    }

    #[test]
    fn test_claim_amount_in_whole_tokens() {
        assert_eq!(whole_tokens(100, 0).unwrap(), 100);
        assert_eq!(whole_tokens(100, 9).unwrap(), 100_000_000_000);
        assert_eq!(whole_tokens(100, 6).unwrap(), 100_000_000);
        assert_airdrop_error(whole_tokens(100, 18), AirdropError::ArithmeticOverflow);
        assert_airdrop_error(whole_tokens(1, 20), AirdropError::ArithmeticOverflow);
    }
}
