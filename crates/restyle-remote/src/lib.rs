//! # restyle-remote - Remote Layout Service
//!
//! Talks to an OpenAI-compatible chat-completions endpoint that turns a
//! natural-language request into a `layout_instruction` document.
//!
//! Depends on [`restyle_core`] for the response schema.
//!
//! ## Public API
//!
//! - [`LayoutServiceClient`] - Credentialed HTTPS client; `None` when no credential
//! - [`ClientConfig`] - Endpoint, model, and timeouts
//! - [`RemoteError`] - Network, status, and decode failure kinds
//! - [`protocol`] - Request/response wire types and the fixed system prompt

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{
    ClientConfig, LayoutServiceClient, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_REQUEST_TIMEOUT,
};
pub use error::RemoteError;
pub use protocol::SYSTEM_PROMPT;
