//! HTTP transport adapter.

mod client;

pub use client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ReqwestTransport};
