//! Passage is a single-upstream HTTP pass-through proxy.
//!
//! It accepts requests under one fixed path prefix, forwards them to a
//! fixed upstream base URL with the inbound method, headers, cookies,
//! and raw body, and relays the upstream response to the caller verbatim
//! minus a small set of hop-by-hop headers. `OPTIONS` requests are
//! answered immediately without an upstream call; CORS headers are added
//! to every response by a Tower layer so browsers can make credentialed
//! cross-origin calls through the proxy.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, health).
//! - [`config`] -- Startup configuration and validation of the upstream
//!   base URL and route prefix.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`health`] -- `GET /health` endpoint handler returning runtime diagnostics.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`middleware`] -- Tower layers applied to every response (CORS).
//! - [`relay`] -- Core HTTP forwarding: upstream URL construction, header
//!   filtering in both directions, and the single upstream call.
//! - [`server`] -- Axum server setup, shared application state, HTTP client,
//!   and graceful shutdown.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod relay;
pub mod server;
