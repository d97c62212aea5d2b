//! The contract a format-preserving cipher must meet to back a token cipher.

use crate::error::FpeError;

/// A format-preserving cipher bound to a key, a tweak and a radix.
///
/// Both operations map a string over the radix alphabet (see
/// [`Alphabet`](crate::Alphabet)) to a same-length string over the same
/// alphabet. Implementations enforce their own length bounds and report them
/// as [`FpeError::MessageLength`].
///
/// Methods take `&self` and must be safe to call concurrently on a shared
/// instance.
pub trait FpePrimitive {
    /// Size of the alphabet this primitive was constructed for.
    fn radix(&self) -> u32;

    /// Encrypt `text` with the bound tweak.
    fn encrypt(&self, text: &str) -> Result<String, FpeError>;

    /// Decrypt `text` with the bound tweak.
    fn decrypt(&self, text: &str) -> Result<String, FpeError>;
}
