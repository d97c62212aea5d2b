//! Error types shared by every FPE primitive implementation.

use thiserror::Error;

/// Errors raised by a format-preserving cipher primitive.
///
/// The token layer propagates these verbatim, so the messages are written for
/// the caller of the token API, not for the primitive's author.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FpeError {
    /// The key is not a valid AES key length.
    #[error("invalid key length: expected 16, 24 or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The tweak is neither a 64-bit (FF3) nor a 56-bit (FF3-1) value.
    #[error("invalid tweak length: expected 8 or 7 bytes, got {0}")]
    InvalidTweakLength(usize),

    /// The radix is outside what the alphabet or the primitive supports.
    #[error("invalid radix: {0}")]
    InvalidRadix(u32),

    /// The message is shorter or longer than the primitive's domain allows.
    #[error("message length {len} is not within min and max bounds [{min}, {max}]")]
    MessageLength {
        /// Length of the rejected message, in symbols.
        len: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },

    /// A symbol of the message is not part of the primitive's alphabet.
    #[error("symbol at position {position} is not in the radix alphabet")]
    SymbolNotInAlphabet {
        /// Zero-based character offset of the offending symbol.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_length_display_includes_bounds() {
        let e = FpeError::MessageLength {
            len: 0,
            min: 2,
            max: 32,
        };
        let msg = e.to_string();
        assert!(msg.contains("not within min and max bounds"));
        assert!(msg.contains("[2, 32]"));
    }

    #[test]
    fn symbol_error_does_not_echo_the_message() {
        let e = FpeError::SymbolNotInAlphabet { position: 3 };
        assert_eq!(
            e.to_string(),
            "symbol at position 3 is not in the radix alphabet"
        );
    }
}
