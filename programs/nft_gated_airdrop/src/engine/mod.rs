pub mod claim_flow;
pub mod gate;
pub mod interfaces;
pub mod ledger;
pub mod treasury;

pub use claim_flow::*;
pub use gate::*;
pub use interfaces::*;
pub use ledger::*;
pub use treasury::*;

use anchor_lang::prelude::*;

use crate::constants::CLAIM_AMOUNT;
use crate::event::ClaimSucceeded;

/// Immutable parameters fixed when an engine is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirdropConfig {
    /// Account holding the reward tokens on the token ledger
    pub address: Pubkey,
    /// Only identity allowed to inspect the balance and withdraw leftovers
    pub owner: Pubkey,
    /// Root produced by `EligibilityTree::build`
    pub merkle_root: [u8; 32],
}

/**
 * Host-side claim engine
 *
 * Composes the eligibility gate, the merkle root, the claim ledger and the
 * treasury behind the airdrop's public surface. Safe to share between
 * threads when the injected ledger and registry are.
 *
 * Claim Pipeline:
 * 1. Credential check (NoCredential)
 * 2. Merkle proof check (InvalidProof)
 * 3. Claimed check (AlreadyClaimed)        \
 * 4. Balance check (InsufficientBalance)    > under the claimant's slot lock
 * 5. Transfer, mark claimed, emit event     /
 */
pub struct ClaimEngine<L, R> {
    merkle_root: [u8; 32],
    gate: EligibilityGate<R>,
    claims: ClaimLedger,
    treasury: Treasury<L>,
}

impl<L: TokenLedger, R: CredentialRegistry> ClaimEngine<L, R> {
    pub fn new(config: AirdropConfig, token_ledger: L, credential_registry: R) -> Self {
        Self {
            merkle_root: config.merkle_root,
            gate: EligibilityGate::new(credential_registry),
            claims: ClaimLedger::new(),
            treasury: Treasury::new(config.address, config.owner, token_ledger),
        }
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.merkle_root
    }

    pub fn owner(&self) -> Pubkey {
        self.treasury.owner()
    }

    pub fn address(&self) -> Pubkey {
        self.treasury.address()
    }

    /// Whole tokens per claim; the host ledger has no decimals to scale by
    pub fn claim_amount(&self) -> u64 {
        CLAIM_AMOUNT
    }

    pub fn token_ledger(&self) -> &L {
        self.treasury.ledger()
    }

    pub fn credential_registry(&self) -> &R {
        self.gate.registry()
    }

    pub fn has_claimed(&self, identity: &Pubkey) -> bool {
        self.claims.has_claimed(identity)
    }

    pub fn claimed_count(&self) -> usize {
        self.claims.claimed_count()
    }

    pub fn can_claim(&self, identity: &Pubkey, proof: &[[u8; 32]]) -> Result<bool> {
        can_claim(&self.gate, identity, proof, &self.merkle_root)
    }

    pub fn claim(&self, claimant: &Pubkey, proof: &[[u8; 32]]) -> Result<ClaimSucceeded> {
        check_eligibility(&self.gate, claimant, proof, &self.merkle_root)?;

        let slot = self.claims.slot(claimant);
        let mut claimed = lock_slot(&slot);
        settle_claim(&self.treasury, &mut *claimed, claimant, CLAIM_AMOUNT)
    }

    pub fn check_contract_balance(&self, caller: &Pubkey) -> Result<u64> {
        self.treasury.balance(caller)
    }

    pub fn withdraw_leftover(&self, caller: &Pubkey) -> Result<u64> {
        self.treasury.withdraw_leftover(caller)
    }
}
