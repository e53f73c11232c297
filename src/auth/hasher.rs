// Passfile — Password hashing
//
// The store treats the password transform as an opaque one-way function:
// deterministic, fixed output width, never wider than the record's digest
// field. The default implementation is a single SHA-256 pass; anything
// satisfying the trait can stand in.

use sha2::{Digest, Sha256};

use crate::store::DIGEST_SIZE;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the password digest function, enabling substitute
/// algorithms and narrow test hashers.
pub trait PasswordHasher {
    /// Digest `plaintext`. Deterministic: equal inputs produce equal
    /// outputs, always exactly `output_len()` bytes.
    fn hash(&self, plaintext: &[u8]) -> Vec<u8>;

    /// Fixed width of this hasher's output. Must not exceed the record's
    /// digest field width; shorter outputs are NUL-padded when stored.
    fn output_len(&self) -> usize;
}

// ─── SHA-256 Implementation ──────────────────────────────────────────────────

/// Default hasher: one SHA-256 pass over the plaintext password.
pub struct Sha256Hasher;

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(plaintext);
        hasher.finalize().to_vec()
    }

    fn output_len(&self) -> usize {
        DIGEST_SIZE
    }
}

// ─── Truncating Mock for Testing ─────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────
