// src/response.rs
//! Response envelopes: `{ code, message, data }` plus a transport status
//!
//! The request context is passed in explicitly through [`ResponseSink`], so
//! any framework's response type can be written to.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::config;
use crate::consts::{DEFAULT_SUCCESS_STATUS, ERROR_TRANSPORT_STATUS, UNSET_STATUS};
use crate::error::Result;

/// The JSON body shape of every helper response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success envelope: the code mirrors the transport status
    pub fn ok(data: Option<T>, message: impl Into<String>, status: u16) -> Self {
        Envelope {
            code: i64::from(status),
            message: message.into(),
            data,
        }
    }

    /// Error envelope: business code, never any data
    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Envelope {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// The mutable part of a framework's request context the helpers write to
pub trait ResponseSink {
    fn set_body(&mut self, body: Value);
    fn set_status(&mut self, status: u16);
}

/// Owned per-request response state
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseContext {
    body: Option<Value>,
    status: u16,
}

impl Default for ResponseContext {
    fn default() -> Self {
        ResponseContext {
            body: None,
            status: UNSET_STATUS,
        }
    }
}

impl ResponseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Serialized body, `None` if nothing was written
    pub fn body_string(&self) -> Result<Option<String>> {
        self.body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(Into::into)
    }
}

impl ResponseSink for ResponseContext {
    fn set_body(&mut self, body: Value) {
        self.body = Some(body);
    }

    fn set_status(&mut self, status: u16) {
        self.status = status;
    }
}

/// Write a success envelope and set the transport status
///
/// Defaults: `data` is `null`, `message` is the configured success message
/// (`"请求成功"`), `status` is 200. The envelope code equals `status`.
pub fn respond_ok<S, T>(
    ctx: &mut S,
    data: Option<T>,
    message: Option<&str>,
    status: Option<u16>,
) -> Result<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    let status = status.unwrap_or(DEFAULT_SUCCESS_STATUS);
    let message = message.unwrap_or(&config::load().response.success_message);
    let body = serde_json::to_value(Envelope::ok(data, message, status))?;

    trace!(status, "writing success envelope");
    ctx.set_body(body);
    ctx.set_status(status);
    Ok(())
}

/// Write an error envelope carrying the business `code`
///
/// The transport status is always 500, even when `code` looks like an HTTP
/// status (404, 401, ...). Callers that need the status to follow the code
/// must set it themselves afterwards.
pub fn respond_error<S>(ctx: &mut S, code: i64, message: &str) -> Result<()>
where
    S: ResponseSink + ?Sized,
{
    let body = serde_json::to_value(Envelope::<Value>::error(code, message))?;

    trace!(code, "writing error envelope");
    ctx.set_body(body);
    ctx.set_status(ERROR_TRANSPORT_STATUS);
    Ok(())
}
