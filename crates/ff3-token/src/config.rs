//! Configuration loading and validation for the `ff3-token` binary.
//!
//! All values are read from `TOKEN_*` environment variables at startup. The
//! process exits with a clear error message if any required variable is
//! missing or invalid.

use std::fmt;

use anyhow::{Context, Result};
use config::{builder::DefaultState, ConfigBuilder};
use ff3::{FF3_1_TWEAK_LEN, FF3_TWEAK_LEN};
use serde::Deserialize;
use zeroize::{Zeroize, Zeroizing};

/// Environment variable prefix.
const ENV_PREFIX: &str = "TOKEN";

/// Which direction the binary runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Numeric plaintext in, alphabetic tokens out.
    #[default]
    Encrypt,
    /// Alphabetic tokens in, numeric plaintext out.
    Decrypt,
}

/// Validated binary configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Hex-encoded AES key (16, 24 or 32 bytes). **Required.**
    pub key: String,

    /// Hex-encoded tweak: 8 bytes for FF3, 7 bytes for FF3-1. **Required.**
    pub tweak: String,

    /// Direction to run in.
    #[serde(default)]
    pub mode: Mode,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::load(
            config::Config::builder().add_source(config::Environment::with_prefix(ENV_PREFIX)),
        )
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg = builder
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Decoded key bytes, zeroed when dropped.
    pub fn key_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        hex::decode(self.key.trim())
            .map(Zeroizing::new)
            .context("TOKEN_KEY must be hex-encoded")
    }

    /// Decoded tweak bytes.
    pub fn tweak_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(self.tweak.trim()).context("TOKEN_TWEAK must be hex-encoded")
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.key, "TOKEN_KEY")?;
        ensure_non_empty(&self.tweak, "TOKEN_TWEAK")?;

        let key_len = self.key_bytes()?.len();
        if ![16, 24, 32].contains(&key_len) {
            anyhow::bail!("TOKEN_KEY must decode to 16, 24 or 32 bytes, got {key_len}");
        }
        let tweak_len = self.tweak_bytes()?.len();
        if tweak_len != FF3_TWEAK_LEN && tweak_len != FF3_1_TWEAK_LEN {
            anyhow::bail!(
                "TOKEN_TWEAK must decode to {FF3_TWEAK_LEN} or {FF3_1_TWEAK_LEN} bytes, got {tweak_len}"
            );
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key", &"[REDACTED]")
            .field("tweak", &self.tweak)
            .field("mode", &self.mode)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Drop for Config {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "EF4359D8D580AA4F7F036D6F04FC6A94";
    const TWEAK: &str = "D8E7920AFA330A73";

    fn config_with(key: &str, tweak: &str) -> Config {
        Config {
            key: key.into(),
            tweak: tweak.into(),
            mode: Mode::default(),
            log_level: default_log_level(),
        }
    }

    fn builder(pairs: &[(&str, &str)]) -> ConfigBuilder<DefaultState> {
        pairs
            .iter()
            .fold(config::Config::builder(), |b, (k, v)| {
                b.set_override(*k, *v).unwrap()
            })
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(Mode::default(), Mode::Encrypt);
    }

    #[test]
    fn load_applies_defaults() {
        let c = Config::load(builder(&[("key", KEY), ("tweak", TWEAK)])).unwrap();
        assert_eq!(c.mode, Mode::Encrypt);
        assert_eq!(c.log_level, "info");
        assert_eq!(c.key_bytes().unwrap().len(), 16);
        assert_eq!(c.tweak_bytes().unwrap().len(), 8);
    }

    #[test]
    fn load_parses_mode() {
        let c = Config::load(builder(&[
            ("key", KEY),
            ("tweak", TWEAK),
            ("mode", "decrypt"),
        ]))
        .unwrap();
        assert_eq!(c.mode, Mode::Decrypt);
        assert!(Config::load(builder(&[("key", KEY), ("tweak", TWEAK), ("mode", "both")])).is_err());
    }

    #[test]
    fn load_requires_key() {
        assert!(Config::load(builder(&[("tweak", TWEAK)])).is_err());
    }

    #[test]
    fn validate_rejects_empty_key() {
        assert!(config_with("", TWEAK).validate().is_err());
        assert!(config_with(KEY, "  ").validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_hex() {
        assert!(config_with("zz4359D8D580AA4F7F036D6F04FC6A94", TWEAK).validate().is_err());
    }

    #[test]
    fn validate_checks_lengths() {
        assert!(config_with("EF4359D8", TWEAK).validate().is_err());
        assert!(config_with(KEY, "D8E7920A").validate().is_err());
        assert!(config_with(KEY, TWEAK).validate().is_ok());
        assert!(config_with(KEY, "D8E7920AFA330A").validate().is_ok());
        assert!(config_with(&KEY.repeat(2), TWEAK).validate().is_ok());
    }

    #[test]
    fn debug_redacts_key() {
        let s = format!("{:?}", config_with(KEY, TWEAK));
        assert!(s.contains("[REDACTED]"));
        assert!(!s.contains(KEY));
    }
}
