//! [`TokenCipher`]: numeric plaintext in, alphabetic token out.

use common::{FpeError, FpePrimitive};
use ff3::Ff3Cipher;
use tracing::{debug, instrument};

use super::substitution::{post_encrypt_transform, pre_decrypt_transform};
use super::validate::is_numeric;
use crate::error::TokenError;

/// Radix the substitution scheme is defined for.
pub const RADIX: u32 = 52;

/// Binds a radix-52 FPE primitive (with its key and tweak) to the
/// numeric ⇄ alphabetic token domains.
///
/// Immutable after construction; `Send + Sync` whenever the primitive is.
#[derive(Debug)]
pub struct TokenCipher<C = Ff3Cipher> {
    primitive: C,
}

impl TokenCipher<Ff3Cipher> {
    /// Create a token cipher backed by FF3 (8-byte tweak) or FF3-1 (7-byte
    /// tweak).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Cipher`] if the key or tweak length is rejected.
    pub fn new(key: &[u8], tweak: &[u8]) -> Result<Self, TokenError> {
        let primitive = Ff3Cipher::new(key, tweak, RADIX)?;
        Self::with_primitive(primitive)
    }
}

impl<C: FpePrimitive> TokenCipher<C> {
    /// Wrap an existing primitive.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Cipher`] with [`FpeError::InvalidRadix`] unless
    /// the primitive operates on [`RADIX`] symbols.
    pub fn with_primitive(primitive: C) -> Result<Self, TokenError> {
        let radix = primitive.radix();
        if radix != RADIX {
            return Err(FpeError::InvalidRadix(radix).into());
        }
        Ok(Self { primitive })
    }

    pub fn primitive(&self) -> &C {
        &self.primitive
    }

    /// Encrypt a numeric string into a purely alphabetic token.
    ///
    /// # Errors
    ///
    /// - [`TokenError::NonNumericPlaintext`] before any cryptographic work if
    ///   `plaintext` is not all digits.
    /// - [`TokenError::Cipher`] if the primitive rejects the input (e.g.
    ///   length out of bounds).
    /// - [`TokenError::EncryptionDomain`] if the primitive's output cannot be
    ///   mapped to letters.
    #[instrument(level = "trace", skip_all, fields(len = plaintext.len()))]
    pub fn encrypt(&self, plaintext: &str) -> Result<String, TokenError> {
        if !is_numeric(plaintext) {
            debug!("rejected non-numeric plaintext");
            return Err(TokenError::NonNumericPlaintext);
        }

        let raw = self.primitive.encrypt(plaintext)?;
        post_encrypt_transform(&raw)
    }

    /// Decrypt an alphabetic token back into its numeric plaintext.
    ///
    /// # Errors
    ///
    /// - [`TokenError::NonAlphabeticCiphertext`] if `ciphertext` contains
    ///   anything other than letters.
    /// - [`TokenError::Cipher`] if the primitive rejects the input.
    /// - [`TokenError::DecryptionDomain`] if the result is not numeric.
    #[instrument(level = "trace", skip_all, fields(len = ciphertext.len()))]
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, TokenError> {
        let restored = pre_decrypt_transform(ciphertext).inspect_err(|_| {
            debug!("rejected non-alphabetic ciphertext");
        })?;

        let decrypted = self.primitive.decrypt(&restored)?;
        if !is_numeric(&decrypted) {
            debug!("decryption produced non-numeric output");
            return Err(TokenError::DecryptionDomain);
        }
        Ok(decrypted)
    }
}
