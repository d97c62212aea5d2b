//! `ff3-token` — binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from `TOKEN_*` environment variables.
//! 2. Initialise structured logging on stderr.
//! 3. Build the [`TokenCipher`] from the configured key and tweak.
//! 4. Tokenise stdin line by line onto stdout.
//!
//! The process exits non-zero if any line was rejected.

mod config;
mod stream;
mod telemetry;

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use ff3_token::TokenCipher;
use tracing::info;

use crate::config::Config;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Logging is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = ?cfg.mode,
        "ff3-token starting"
    );

    // -----------------------------------------------------------------------
    // 3. Cipher
    // -----------------------------------------------------------------------
    let key = cfg.key_bytes()?;
    let tweak = cfg.tweak_bytes()?;
    let cipher = TokenCipher::new(&key, &tweak).context("failed to initialise token cipher")?;
    info!(variant = ?cipher.primitive().variant(), "cipher ready");

    // -----------------------------------------------------------------------
    // 4. Tokenise
    // -----------------------------------------------------------------------
    let summary = stream::run(
        &cipher,
        cfg.mode,
        io::stdin().lock(),
        BufWriter::new(io::stdout().lock()),
    )?;
    info!(
        processed = summary.processed,
        rejected = summary.rejected,
        "ff3-token finished"
    );

    if summary.rejected > 0 {
        anyhow::bail!(
            "{} of {} tokens rejected",
            summary.rejected,
            summary.processed
        );
    }
    Ok(())
}
