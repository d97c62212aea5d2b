//! Line-oriented tokenisation of a reader into a writer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use common::FpePrimitive;
use ff3_token::TokenCipher;
use tracing::warn;

use crate::config::Mode;

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines read.
    pub processed: usize,
    /// Lines whose token was rejected.
    pub rejected: usize,
}

/// Encrypt or decrypt every line of `input`, writing one result line each.
///
/// A rejected line produces an empty output line so that output line `n`
/// always corresponds to input line `n`. Lines that are not valid UTF-8 are
/// rejected the same way.
///
/// # Errors
///
/// Returns an error only for I/O failures; token errors are counted in the
/// returned [`Summary`].
pub fn run<C, R, W>(cipher: &TokenCipher<C>, mode: Mode, input: R, mut output: W) -> Result<Summary>
where
    C: FpePrimitive,
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();

    for (idx, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes.context("failed to read input")?;
        summary.processed += 1;

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(_) => {
                summary.rejected += 1;
                warn!(line = idx + 1, "token rejected: input is not valid UTF-8");
                writeln!(output).context("failed to write output")?;
                continue;
            }
        };
        let token = line.strip_suffix('\r').unwrap_or(&line);

        let result = match mode {
            Mode::Encrypt => cipher.encrypt(token),
            Mode::Decrypt => cipher.decrypt(token),
        };

        let written = match result {
            Ok(out) => writeln!(output, "{out}"),
            Err(e) => {
                summary.rejected += 1;
                warn!(line = idx + 1, kind = e.kind().as_str(), error = %e, "token rejected");
                writeln!(output)
            }
        };
        written.context("failed to write output")?;
    }

    output.flush().context("failed to flush output")?;
    Ok(summary)
}
