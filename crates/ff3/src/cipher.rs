//! FF3 / FF3-1 encryption and decryption of numeral strings.
//!
//! **Algorithm:** NIST SP 800-38G FF3, an eight-round Feistel network whose
//! round function is a single AES block encryption. The same code serves
//! FF3-1; only the tweak layout and the minimum domain size differ (see
//! [`Variant`]).
//!
//! Every half of a message in range satisfies `radix^m <= 2^96`, so numeral
//! arithmetic is done in `u128` without a big-integer dependency.

use std::fmt;

use aes::{
    cipher::{BlockEncrypt, InvalidLength, KeyInit},
    Aes128, Aes192, Aes256, Block,
};
use common::{Alphabet, FpeError, FpePrimitive};
use zeroize::Zeroizing;

use crate::tweak::{Tweak, Variant};

/// Number of Feistel rounds.
pub const ROUNDS: u8 = 8;

/// Largest half-message domain: `2^96`.
const MAX_HALF_DOMAIN: u128 = 1 << 96;

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// AES keyed with `REVB(K)`.
///
/// The `aes` key schedules are zeroed when dropped.
enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    fn new(key: &[u8]) -> Result<Self, FpeError> {
        let reversed = Zeroizing::new(key.iter().rev().copied().collect::<Vec<u8>>());
        let invalid = |_: InvalidLength| FpeError::InvalidKeyLength(key.len());
        match key.len() {
            16 => Aes128::new_from_slice(&reversed)
                .map(Self::Aes128)
                .map_err(invalid),
            24 => Aes192::new_from_slice(&reversed)
                .map(Self::Aes192)
                .map_err(invalid),
            32 => Aes256::new_from_slice(&reversed)
                .map(Self::Aes256)
                .map_err(invalid),
            n => Err(FpeError::InvalidKeyLength(n)),
        }
    }

    fn encrypt_block(&self, block: &mut Block) {
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn key_bits(&self) -> u32 {
        match self {
            Self::Aes128(_) => 128,
            Self::Aes192(_) => 192,
            Self::Aes256(_) => 256,
        }
    }
}

/// An FF3 or FF3-1 cipher bound to a key, a default tweak and a radix.
pub struct Ff3Cipher {
    block: BlockCipher,
    alphabet: Alphabet,
    tweak: Tweak,
    max_len: usize,
}

impl Ff3Cipher {
    /// Create a cipher for `radix`-symbol strings.
    ///
    /// The tweak length selects the revision: 8 bytes for FF3, 7 bytes for
    /// FF3-1.
    ///
    /// # Errors
    ///
    /// Returns [`FpeError::InvalidKeyLength`] unless `key` is 16, 24 or 32 bytes,
    /// [`FpeError::InvalidTweakLength`] unless `tweak` is 7 or 8 bytes, and
    /// [`FpeError::InvalidRadix`] unless `2 <= radix <= 62`.
    pub fn new(key: &[u8], tweak: &[u8], radix: u32) -> Result<Self, FpeError> {
        let block = BlockCipher::new(key)?;
        let tweak = Tweak::parse(tweak)?;
        let alphabet = Alphabet::new(radix)?;
        Ok(Self {
            block,
            alphabet,
            tweak,
            max_len: max_len(radix),
        })
    }

    /// Revision selected by the bound tweak.
    pub fn variant(&self) -> Variant {
        self.tweak.variant
    }

    /// Inclusive `(min, max)` message length accepted with the bound tweak.
    pub fn length_bounds(&self) -> (usize, usize) {
        self.bounds(self.tweak.variant)
    }

    /// Encrypt `text` with a per-call tweak instead of the bound one.
    ///
    /// # Errors
    ///
    /// Returns [`FpeError::InvalidTweakLength`] for a malformed tweak, plus
    /// every error [`FpePrimitive::encrypt`] can return.
    pub fn encrypt_with_tweak(&self, text: &str, tweak: &[u8]) -> Result<String, FpeError> {
        let tweak = Tweak::parse(tweak)?;
        self.cipher(text, &tweak, Direction::Encrypt)
    }

    /// Decrypt `text` with a per-call tweak instead of the bound one.
    ///
    /// # Errors
    ///
    /// See [`Ff3Cipher::encrypt_with_tweak`].
    pub fn decrypt_with_tweak(&self, text: &str, tweak: &[u8]) -> Result<String, FpeError> {
        let tweak = Tweak::parse(tweak)?;
        self.cipher(text, &tweak, Direction::Decrypt)
    }

    fn bounds(&self, variant: Variant) -> (usize, usize) {
        (min_len(self.alphabet.radix(), variant.min_domain()), self.max_len)
    }

    fn cipher(&self, text: &str, tweak: &Tweak, direction: Direction) -> Result<String, FpeError> {
        let n = text.chars().count();
        let (min, max) = self.bounds(tweak.variant);
        if n < min || n > max {
            return Err(FpeError::MessageLength { len: n, min, max });
        }

        let numerals = self.alphabet.to_numerals(text)?;
        let radix = u128::from(self.alphabet.radix());
        let u = n.div_ceil(2);
        let v = n - u;
        let (a, b) = numerals.split_at(u);
        let (mut a, mut b) = (a.to_vec(), b.to_vec());

        match direction {
            Direction::Encrypt => {
                for round in 0..ROUNDS {
                    let m = if round % 2 == 0 { u } else { v };
                    let modulus = radix.pow(m as u32);
                    let y = self.round_value(tweak, round, &b, radix) % modulus;
                    let c = (num_rev(&a, radix) + y) % modulus;
                    a = std::mem::replace(&mut b, str_rev(c, radix, m));
                }
            }
            Direction::Decrypt => {
                for round in (0..ROUNDS).rev() {
                    let m = if round % 2 == 0 { u } else { v };
                    let modulus = radix.pow(m as u32);
                    let y = self.round_value(tweak, round, &a, radix) % modulus;
                    let c = (num_rev(&b, radix) + modulus - y) % modulus;
                    b = std::mem::replace(&mut a, str_rev(c, radix, m));
                }
            }
        }

        a.extend_from_slice(&b);
        Ok(self.alphabet.to_text(&a))
    }

    /// Round function output `NUM(S)` where
    /// `P = W ⊕ [round]^4 || [NUM_radix(REV(half))]^12` and
    /// `S = REVB(CIPH(REVB(P)))`.
    fn round_value(&self, tweak: &Tweak, round: u8, half: &[u32], radix: u128) -> u128 {
        let mut p = [0u8; 16];
        p[..4].copy_from_slice(tweak.for_round(round));
        p[3] ^= round;
        p[4..].copy_from_slice(&num_rev(half, radix).to_be_bytes()[4..]);
        p.reverse();

        let mut block = Block::default();
        block.copy_from_slice(&p);
        self.block.encrypt_block(&mut block);

        let mut s = [0u8; 16];
        s.copy_from_slice(&block);
        // NUM(REVB(s))
        u128::from_le_bytes(s)
    }
}

impl FpePrimitive for Ff3Cipher {
    fn radix(&self) -> u32 {
        self.alphabet.radix()
    }

    fn encrypt(&self, text: &str) -> Result<String, FpeError> {
        self.cipher(text, &self.tweak, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str) -> Result<String, FpeError> {
        self.cipher(text, &self.tweak, Direction::Decrypt)
    }
}

impl fmt::Debug for Ff3Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key or tweak material.
        f.debug_struct("Ff3Cipher")
            .field("key_bits", &self.block.key_bits())
            .field("radix", &self.alphabet.radix())
            .field("variant", &self.tweak.variant)
            .finish_non_exhaustive()
    }
}

/// `NUM_radix(REV(numerals))`: the numerals read least-significant first.
fn num_rev(numerals: &[u32], radix: u128) -> u128 {
    numerals
        .iter()
        .rev()
        .fold(0, |acc, &d| acc * radix + u128::from(d))
}

/// `REV(STR^m_radix(value))`: `m` numerals, least-significant first.
fn str_rev(mut value: u128, radix: u128, m: usize) -> Vec<u32> {
    (0..m)
        .map(|_| {
            let d = (value % radix) as u32;
            value /= radix;
            d
        })
        .collect()
}

/// Smallest length `>= 2` whose domain `radix^len` reaches `min_domain`.
fn min_len(radix: u32, min_domain: u128) -> usize {
    let radix = u128::from(radix);
    let mut len = 1;
    let mut domain = radix;
    while domain < min_domain {
        domain *= radix;
        len += 1;
    }
    len.max(2)
}

/// `2 * floor(log_radix(2^96))`.
fn max_len(radix: u32) -> usize {
    let radix = u128::from(radix);
    let mut half = 0;
    let mut domain: u128 = 1;
    while domain * radix <= MAX_HALF_DOMAIN {
        domain *= radix;
        half += 1;
    }
    2 * half
}
