//! Numeric ⇄ alphabetic tokenisation on top of a radix-52 FPE primitive.
//!
//! # Token format
//!
//! ```text
//! plaintext   [0-9]+        --encrypt-->   ciphertext   [a-zA-Z]+
//! ```
//!
//! Both sides have the same length. Because the two character sets are
//! disjoint, a token can never be mistaken for a plaintext value.
//!
//! - `encrypt`: [`is_numeric`] → primitive → [`post_encrypt_transform`]
//! - `decrypt`: [`pre_decrypt_transform`] → primitive → [`is_numeric`]

pub mod cipher;
pub mod substitution;
pub mod validate;

pub use cipher::{TokenCipher, RADIX};
pub use substitution::{
    post_encrypt_transform, pre_decrypt_transform, SubstitutionTable, SUBSTITUTION_TABLE,
};
pub use validate::is_numeric;
