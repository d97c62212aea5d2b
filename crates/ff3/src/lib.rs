//! NIST SP 800-38G FF3 and FF3-1 format-preserving encryption.
//!
//! [`Ff3Cipher`] implements [`common::FpePrimitive`] over AES-128/192/256 for
//! any radix from 2 to 62, using the numeral alphabet from
//! [`common::Alphabet`].
//!
//! ```
//! use common::FpePrimitive;
//! use ff3::Ff3Cipher;
//!
//! let key = [0x2B; 16];
//! let tweak = [0u8; 8];
//! let cipher = Ff3Cipher::new(&key, &tweak, 10).unwrap();
//! let ct = cipher.encrypt("4111111111111111").unwrap();
//! assert_eq!(ct.len(), 16);
//! assert_eq!(cipher.decrypt(&ct).unwrap(), "4111111111111111");
//! ```

pub mod cipher;
pub mod tweak;

pub use cipher::Ff3Cipher;
pub use tweak::{Variant, FF3_1_TWEAK_LEN, FF3_TWEAK_LEN};
