//! BLAKE3 helpers for cache keys and deterministic seeds.

#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// First 8 bytes of the BLAKE3 hash, little-endian.
///
/// Used for stub-embedding seeds, where a collision only means two texts share
/// a vector. Use [`hash_text`] for cache keys.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
