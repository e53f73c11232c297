// Passfile — Credential verifier
//
// Answers "does this username/password pair match a stored record" as a
// single boolean. Each call runs the full store lifecycle: open + load,
// resolve the username, hash the supplied password, compare digests in
// constant time, close. An unknown username and a wrong password are
// indistinguishable in the result — the caller learns only the boolean.

use std::path::PathBuf;

use zeroize::Zeroizing;

use crate::store::{pad_digest, Database, StoreError, DIGEST_SIZE};

use super::hasher::PasswordHasher;

pub struct Verifier<H: PasswordHasher> {
    path: PathBuf,
    hasher: H,
}

impl<H: PasswordHasher> Verifier<H> {
    pub fn new(path: impl Into<PathBuf>, hasher: H) -> Self {
        Self {
            path: path.into(),
            hasher,
        }
    }

    /// Check `password` against the stored digest for `username`.
    /// `Ok(false)` covers both "no such user" and "wrong password".
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let mut db = Database::open(&self.path)?;
        db.load()?;

        let stored: [u8; DIGEST_SIZE] = match db.table().find_by_username(username) {
            Ok(rec) => *rec.digest(),
            Err(StoreError::NotFound(_)) => {
                db.close()?;
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        // The stored field is NUL-padded; pad the computed digest the same
        // way and compare the full width.
        let computed = Zeroizing::new(pad_digest(&self.hasher.hash(password.as_bytes())));
        let verified = constant_time_eq(&*computed, &stored);
        db.close()?;

        Ok(verified)
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ─── Tests ───────────────────────────────────────────────────────────────────
