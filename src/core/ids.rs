use sha2::{Digest, Sha256};

const NAME_HASH_MODULUS: u64 = 10_000_000;

/// Stable hash of a product name, bounded to seven digits.
pub fn name_hash(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix) % NAME_HASH_MODULUS
}

pub fn product_id(store: &str, row: usize, name: &str) -> String {
    format!("{}_{}_{}", store.to_lowercase(), row, name_hash(name))
}

pub fn store_offer_id(store: &str, name: &str) -> String {
    format!("{}_{}", store.to_lowercase(), name_hash(name))
}
