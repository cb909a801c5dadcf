use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::hashv;

/// Leaf encoding of an eligible identity.
///
/// The amount is fixed for every claimant, so only the identity is committed.
pub fn hash_leaf(identity: &Pubkey) -> [u8; 32] {
    hashv(&[&identity.to_bytes()]).to_bytes()
}

/// Hash two sibling nodes in lexicographic order.
///
/// Sorting the pair makes the result independent of which side each node sits
/// on, so proofs carry no position information.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Verifies a merkle proof for `leaf` against `root`.
///
/// The whole proof is always folded before the single comparison at the end.
/// A proof of the wrong length or with a wrong sibling simply fails to
/// reproduce the root.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
