use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anchor_lang::prelude::*;

/// A claimed flag that flips from `false` to `true` once.
///
/// Implemented by the in-memory slot flag and by the on-chain `ClaimRecord`.
pub trait ClaimMark {
    fn is_claimed(&self) -> bool;
    fn mark_claimed(&mut self);
}

impl ClaimMark for bool {
    fn is_claimed(&self) -> bool {
        *self
    }

    fn mark_claimed(&mut self) {
        *self = true;
    }
}

/// Per-identity claimed flag, shared by every claim for that identity
pub type ClaimSlot = Arc<Mutex<bool>>;

/**
 * In-memory claim ledger
 *
 * Every identity gets its own slot. Holding the slot's lock is what makes
 * "check claimed, check balance, transfer, mark claimed" indivisible for one
 * identity while claims for other identities run in parallel.
 */
#[derive(Debug, Default)]
pub struct ClaimLedger {
    slots: Mutex<HashMap<Pubkey, ClaimSlot>>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_claimed(&self, identity: &Pubkey) -> bool {
        let slot = self.slots_guard().get(identity).cloned();
        slot.is_some_and(|slot| lock_slot(&slot).is_claimed())
    }

    /// Marks `identity` as claimed without checking the previous value.
    ///
    /// The caller must have seen `has_claimed == false` in the same unit of
    /// work; `ClaimEngine::claim` does this under the slot lock instead.
    pub fn mark_claimed(&self, identity: &Pubkey) {
        let slot = self.slot(identity);
        lock_slot(&slot).mark_claimed();
    }

    /// Slot for `identity`, created unclaimed on first use
    pub fn slot(&self, identity: &Pubkey) -> ClaimSlot {
        self.slots_guard()
            .entry(*identity)
            .or_insert_with(|| Arc::new(Mutex::new(false)))
            .clone()
    }

    pub fn claimed_count(&self) -> usize {
        let slots: Vec<ClaimSlot> = self.slots_guard().values().cloned().collect();
        slots
            .iter()
            .filter(|slot| lock_slot(slot).is_claimed())
            .count()
    }

    fn slots_guard(&self) -> MutexGuard<'_, HashMap<Pubkey, ClaimSlot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A panic while a slot was held cannot leave a half-written bool behind.
pub fn lock_slot(slot: &ClaimSlot) -> MutexGuard<'_, bool> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
