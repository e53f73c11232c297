// Passfile — Auth Module
//
// The pluggable password-hash capability and the login verifier built on
// it. Storage logic never names an algorithm — the hasher is injected at
// this seam, so a different digest can be substituted without touching the
// store.

mod hasher;
mod verifier;

pub use hasher::{PasswordHasher, Sha256Hasher};
pub use verifier::Verifier;
