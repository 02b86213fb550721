// src/consts.rs
//! Shared constants: hashing parameters and response defaults

/// bcrypt work factor used by `hash` unless the config overrides it
// 2^10 rounds ≈ 50–100ms on typical CPU
pub const DEFAULT_HASH_COST: u32 = 10;

/// Message placed in a success envelope when the caller gives none
pub const DEFAULT_SUCCESS_MESSAGE: &str = "请求成功";

/// Transport status (and envelope code) of a success response by default
pub const DEFAULT_SUCCESS_STATUS: u16 = 200;

/// Transport status of every error response, whatever the business code
pub const ERROR_TRANSPORT_STATUS: u16 = 500;

/// Status of a response nobody has written to yet
pub const UNSET_STATUS: u16 = 404;

/// Env var naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "REQUEST_HELPER_CONFIG";

/// Env var overriding `hashing.cost`
pub const HASH_COST_ENV: &str = "REQUEST_HELPER_HASH_COST";

/// Config file looked up when `REQUEST_HELPER_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "request-helper.toml";
