//! Token cipher error types.

use common::FpeError;
use thiserror::Error;

/// Errors returned by [`TokenCipher`](crate::TokenCipher).
///
/// Every error is final for the call that produced it: the cipher is
/// deterministic, so retrying the same input gives the same result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Plaintext contained something other than ASCII digits.
    #[error("invalid input sent to encrypt (must be numeric)")]
    NonNumericPlaintext,

    /// Ciphertext contained something other than ASCII letters.
    #[error("invalid input sent to decrypt (must be alphabetic)")]
    NonAlphabeticCiphertext,

    /// The cipher returned a symbol that is neither a digit nor a letter.
    #[error("encryption produced invalid output at position {position}")]
    EncryptionDomain {
        /// Zero-based character offset of the offending symbol.
        position: usize,
    },

    /// Decryption succeeded but the result is not numeric: wrong key or
    /// tweak, or a corrupted token.
    #[error("decrypt failed to produce numeric output")]
    DecryptionDomain,

    /// Propagated unchanged from the underlying FPE primitive.
    #[error(transparent)]
    Cipher(#[from] FpeError),
}

/// Coarse classification of a [`TokenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller's input is outside the operation's domain.
    InvalidInput,
    /// The cipher produced output the substitution cannot map.
    EncryptionDomain,
    /// Decrypted output is not numeric.
    DecryptionDomain,
    /// The FPE primitive itself failed.
    UnderlyingCipher,
}

impl ErrorKind {
    /// Stable snake-case name, suitable for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::EncryptionDomain => "encryption_domain",
            ErrorKind::DecryptionDomain => "decryption_domain",
            ErrorKind::UnderlyingCipher => "underlying_cipher",
        }
    }
}

impl TokenError {
    /// Returns the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::NonNumericPlaintext | TokenError::NonAlphabeticCiphertext => {
                ErrorKind::InvalidInput
            }
            TokenError::EncryptionDomain { .. } => ErrorKind::EncryptionDomain,
            TokenError::DecryptionDomain => ErrorKind::DecryptionDomain,
            TokenError::Cipher(_) => ErrorKind::UnderlyingCipher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(TokenError::NonNumericPlaintext.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            TokenError::NonAlphabeticCiphertext.kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            TokenError::EncryptionDomain { position: 0 }.kind(),
            ErrorKind::EncryptionDomain
        );
        assert_eq!(
            TokenError::DecryptionDomain.kind(),
            ErrorKind::DecryptionDomain
        );
        assert_eq!(
            TokenError::from(FpeError::InvalidRadix(10)).kind(),
            ErrorKind::UnderlyingCipher
        );
    }

    #[test]
    fn cipher_errors_display_verbatim() {
        let inner = FpeError::MessageLength {
            len: 0,
            min: 2,
            max: 32,
        };
        assert_eq!(TokenError::from(inner.clone()).to_string(), inner.to_string());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ErrorKind::InvalidInput.as_str(), "invalid_input");
        assert_eq!(ErrorKind::UnderlyingCipher.as_str(), "underlying_cipher");
    }
}
