//! Sorted-pair Merkle proofs.
//!
//! Interior nodes hash the lexicographically smaller child first, so a proof
//! is just the list of sibling hashes from leaf to root with no direction
//! bits. The hash function is supplied by the caller (keccak256 on-chain).

pub type Hash32 = [u8; 32];

fn hash_pair<H: Fn(&[u8]) -> Hash32>(a: &Hash32, b: &Hash32, hash: &H) -> Hash32 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(low);
    buf[32..].copy_from_slice(high);
    hash(&buf)
}

/// Recomputes the root implied by `leaf` and its sibling path.
pub fn process_proof<H: Fn(&[u8]) -> Hash32>(proof: &[Hash32], leaf: Hash32, hash: H) -> Hash32 {
    proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling, &hash))
}

pub fn verify_proof<H: Fn(&[u8]) -> Hash32>(
    proof: &[Hash32],
    root: &Hash32,
    leaf: Hash32,
    hash: H,
) -> bool {
    &process_proof(proof, leaf, hash) == root
}

fn next_level<H: Fn(&[u8]) -> Hash32>(level: &[Hash32], hash: &H) -> Vec<Hash32> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [a, b] => hash_pair(a, b, hash),
            [single] => *single,
            _ => unreachable!("chunks(2) yields one or two nodes"),
        })
        .collect()
}

/// Root of the tree over `leaves`. An odd node is promoted unchanged.
/// Returns `None` for an empty leaf set.
pub fn compute_root<H: Fn(&[u8]) -> Hash32>(leaves: &[Hash32], hash: H) -> Option<Hash32> {
    let mut level = leaves.to_vec();
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        level = next_level(&level, &hash);
    }
    level.first().copied()
}

/// Sibling path for the leaf at `index`, matching [`compute_root`].
pub fn proof_for<H: Fn(&[u8]) -> Hash32>(
    leaves: &[Hash32],
    mut index: usize,
    hash: H,
) -> Option<Vec<Hash32>> {
    if index >= leaves.len() {
        return None;
    }
    let mut level = leaves.to_vec();
    let mut proof = Vec::new();
    while level.len() > 1 {
        let sibling = index ^ 1;
        if let Some(node) = level.get(sibling) {
            proof.push(*node);
        }
        level = next_level(&level, &hash);
        index /= 2;
    }
    Some(proof)
}
