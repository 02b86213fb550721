// src/hash.rs
//! Password hashing: bcrypt digest and verification
//!
//! Digests are salted per call, so two hashes of the same secret differ.
//! Only `verify` is infallible: a malformed digest simply does not match.

use secure_gate::RevealSecret;
use tracing::debug;

use crate::aliases::Secret;
use crate::config;
use crate::error::Result;

/// Hash `secret` at the configured work factor (`hashing.cost`, default 10)
pub fn hash(secret: &str) -> Result<String> {
    hash_with_cost(secret, config::load().hashing.cost)
}

/// Hash `secret` at an explicit bcrypt cost (valid range 4..=31)
pub fn hash_with_cost(secret: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(secret.as_bytes(), cost)?)
}

/// [`hash`] for a secret the caller keeps in a zeroizing [`Secret`]
pub fn hash_secret(secret: &Secret) -> Result<String> {
    hash(secret.expose_secret())
}

/// Check `secret` against a digest produced by [`hash`]
///
/// Returns `false` both on mismatch and when `digest` cannot be parsed.
pub fn verify(secret: &str, digest: &str) -> bool {
    match bcrypt::verify(secret.as_bytes(), digest) {
        Ok(matched) => {
            if !matched {
                debug!("secret does not match digest");
            }
            matched
        }
        Err(e) => {
            debug!(error = %e, "malformed digest, treating as mismatch");
            false
        }
    }
}

/// [`verify`] for a secret the caller keeps in a zeroizing [`Secret`]
pub fn verify_secret(secret: &Secret, digest: &str) -> bool {
    verify(secret.expose_secret(), digest)
}
