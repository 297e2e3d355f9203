use sha2::{Digest, Sha256};

/// Multihash code for sha2-256.
pub(crate) const SHA2_256_CODE: u8 = 0x12;
pub(crate) const SHA2_256_LEN: u8 = 32;

/// `code || len || sha2-256(block)`, the form a CIDv0 encodes.
pub(crate) fn multihash(block: &[u8]) -> Vec<u8> {
    let digest = Sha256::digest(block);

    let mut out = Vec::with_capacity(2 + digest.len());
    out.push(SHA2_256_CODE);
    out.push(SHA2_256_LEN);
    out.extend_from_slice(&digest);
    out
}
