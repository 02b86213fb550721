// src/config/defaults.rs
use crate::config::app::{Hashing, Response};
use crate::consts::{DEFAULT_HASH_COST, DEFAULT_SUCCESS_MESSAGE};

pub const DEFAULT_COST: u32 = DEFAULT_HASH_COST;
pub const DEFAULT_MESSAGE: &str = DEFAULT_SUCCESS_MESSAGE;

pub fn default_hashing() -> Hashing {
    Hashing { cost: DEFAULT_COST }
}

pub fn default_response() -> Response {
    Response {
        success_message: DEFAULT_MESSAGE.into(),
    }
}
