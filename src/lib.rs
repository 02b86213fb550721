// src/lib.rs
//! request-helper: per-request helpers for a web service
//!
//! Features:
//! - bcrypt password hashing and verification
//! - Array difference over primitive keys
//! - `{ code, message, data }` success/error response envelopes

pub mod aliases;
pub mod config;
pub mod consts;
pub mod diff;
pub mod error;
pub mod hash;
pub mod response;

// Re-export everything users need at the crate root
pub use aliases::Secret;
pub use config::load as load_config;
pub use diff::{diff, ArrayKey, Diff};
pub use error::{HelperError, Result as HelperResult};
pub use hash::{hash, hash_secret, hash_with_cost, verify, verify_secret};
pub use response::{respond_error, respond_ok, Envelope, ResponseContext, ResponseSink};
