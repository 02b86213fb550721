// src/config/mod.rs
//! Configuration system for request-helper
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, resolve, Config, Hashing, Response};

mod app;
mod defaults;
