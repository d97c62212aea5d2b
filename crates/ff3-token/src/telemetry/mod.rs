//! Structured logging for the `ff3-token` binary.
//!
//! Logs go to stderr as JSON so that stdout carries only tokens.
//!
//! # Telemetry invariants
//!
//! - **No token values or key material** may appear in any log field; only
//!   line numbers, lengths and error kinds.
//! - Log level is configurable via `TOKEN_LOG_LEVEL` (default: `info`), or
//!   `RUST_LOG`, which takes precedence.

pub mod init;

pub use init::init_telemetry;
