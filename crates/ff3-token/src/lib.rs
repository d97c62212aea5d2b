//! FF3 tokenisation of numeric values into purely alphabetic tokens.
//!
//! ```
//! use ff3_token::TokenCipher;
//!
//! let key = [
//!     0xEF, 0x43, 0x59, 0xD8, 0xD5, 0x80, 0xAA, 0x4F,
//!     0x7F, 0x03, 0x6D, 0x6F, 0x04, 0xFC, 0x6A, 0x94,
//! ];
//! let tweak = [0xD8, 0xE7, 0x92, 0x0A, 0xFA, 0x33, 0x0A, 0x73];
//!
//! let cipher = TokenCipher::new(&key, &tweak).unwrap();
//! let token = cipher.encrypt("890121234567890000").unwrap();
//! assert_eq!(token, "OOGkpxFEKMmCufxYul");
//! assert_eq!(cipher.decrypt(&token).unwrap(), "890121234567890000");
//! ```

pub mod error;
pub mod token;

pub use error::{ErrorKind, TokenError};
pub use token::{is_numeric, TokenCipher, RADIX};
