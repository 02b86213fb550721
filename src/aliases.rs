// src/aliases.rs
//! Re-exports secure-gate's secret wrapper for plaintext secrets
//!
//! A `Secret` wipes the caller's own copy of a password when dropped.
//! The hashing helpers only borrow it; bcrypt's internal buffers are not
//! covered.

pub use secure_gate::dynamic_alias;

// Plaintext password or other secret awaiting hashing/verification
dynamic_alias!(pub Secret, String);
