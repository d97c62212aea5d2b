//! Shared primitive contract, numeral alphabets, and errors for the `ff3-token` crates.

pub mod alphabet;
pub mod error;
pub mod primitive;

pub use alphabet::Alphabet;
pub use error::FpeError;
pub use primitive::FpePrimitive;
