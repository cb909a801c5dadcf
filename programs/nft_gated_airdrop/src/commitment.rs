use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::utils::{hash_leaf, hash_pair};

/**
 * Off-chain commitment over the eligibility set
 *
 * Builds the merkle tree whose root is baked into an airdrop at
 * initialization and hands out the per-identity proofs claimants submit.
 *
 * Tree Structure:
 * - Level 0: hash_leaf(identity) for every entry, in input order
 * - Parent: hash_pair(left, right), sorted-pair hashing shared with `verify`
 * - A trailing odd node at any level is paired with itself
 * - Root: the single node of the last level
 *
 * The same ordered input always yields the same root and proofs.
 */
#[derive(Debug, Clone)]
pub struct EligibilityTree {
    entries: Vec<EligibilityEntry>,
    index: HashMap<Pubkey, usize>,
    levels: Vec<Vec<[u8; 32]>>,
}

/// One member of the eligibility set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityEntry {
    pub identity: Pubkey,
    pub leaf: [u8; 32],
}

impl EligibilityEntry {
    pub fn new(identity: Pubkey) -> Self {
        Self {
            identity,
            leaf: hash_leaf(&identity),
        }
    }
}

impl EligibilityTree {
    pub fn build(identities: &[Pubkey]) -> Result<Self> {
        require!(!identities.is_empty(), AirdropError::EmptySet);

        let mut index = HashMap::with_capacity(identities.len());
        let mut entries = Vec::with_capacity(identities.len());
        for (position, identity) in identities.iter().enumerate() {
            if index.insert(*identity, position).is_some() {
                msg!("duplicate eligibility entry: {}", identity);
                return err!(AirdropError::DuplicateEntry);
            }
            entries.push(EligibilityEntry::new(*identity));
        }

        let mut levels = vec![entries.iter().map(|entry| entry.leaf).collect::<Vec<_>>()];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = level
                .chunks(2)
                .map(|pair| hash_pair(&pair[0], pair.get(1).unwrap_or(&pair[0])))
                .collect();
            levels.push(next);
        }

        Ok(Self {
            entries,
            index,
            levels,
        })
    }

    pub fn root(&self) -> [u8; 32] {
        // build() rejects empty input, so the top level always holds the root
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[EligibilityEntry] {
        &self.entries
    }

    pub fn contains(&self, identity: &Pubkey) -> bool {
        self.index.contains_key(identity)
    }

    /// Proof for `identity`, or `None` when it is not a member
    pub fn proof(&self, identity: &Pubkey) -> Option<Vec<[u8; 32]>> {
        self.index
            .get(identity)
            .and_then(|position| self.proof_at(*position))
    }

    /// Proof for the leaf at `index`: one sibling per level, leaf to root
    pub fn proof_at(&self, index: usize) -> Option<Vec<[u8; 32]>> {
        if index >= self.leaf_count() {
            return None;
        }

        let mut proof = Vec::with_capacity(self.levels.len() - 1);
        let mut current = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if current % 2 == 0 {
                // No right neighbour means the node was paired with itself
                level.get(current + 1).unwrap_or(&level[current])
            } else {
                &level[current - 1]
            };
            proof.push(*sibling);
            current /= 2;
        }

        Some(proof)
    }

    /// Proofs for every member, keyed by identity
    pub fn proofs(&self) -> HashMap<Pubkey, Vec<[u8; 32]>> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                self.proof_at(position).map(|proof| (entry.identity, proof))
            })
            .collect()
    }
}
