//! Numeral alphabets for radix 2..=62.
//!
//! The symbol order follows the usual big-integer text encoding: digits, then
//! lower-case letters, then upper-case letters. A radix-`r` alphabet is the
//! first `r` symbols of [`BASE62_SYMBOLS`], so radix 52 covers `0-9a-zA-P` and
//! never emits `Q-Z`.

use crate::error::FpeError;

/// Every symbol a supported alphabet can contain, in numeral order.
pub const BASE62_SYMBOLS: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix.
pub const MAX_RADIX: u32 = BASE62_SYMBOLS.len() as u32;

/// The numeral alphabet of a fixed radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    radix: u32,
}

impl Alphabet {
    /// Build the alphabet for `radix`.
    ///
    /// # Errors
    ///
    /// Returns [`FpeError::InvalidRadix`] unless `2 <= radix <= 62`.
    pub fn new(radix: u32) -> Result<Self, FpeError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(FpeError::InvalidRadix(radix));
        }
        Ok(Self { radix })
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Numeral value of `c`, or `None` if `c` is outside this alphabet.
    pub fn index_of(&self, c: char) -> Option<u32> {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'a'..='z' => c as u32 - 'a' as u32 + 10,
            'A'..='Z' => c as u32 - 'A' as u32 + 36,
            _ => return None,
        };
        (value < self.radix).then_some(value)
    }

    /// Symbol for numeral value `value`.
    ///
    /// `value` must be below the radix; callers only pass remainders modulo
    /// the radix.
    pub fn symbol(&self, value: u32) -> char {
        debug_assert!(value < self.radix);
        BASE62_SYMBOLS[value as usize] as char
    }

    /// Convert `text` into numeral values.
    ///
    /// # Errors
    ///
    /// Returns [`FpeError::SymbolNotInAlphabet`] with the offset of the first
    /// symbol outside the alphabet.
    pub fn to_numerals(&self, text: &str) -> Result<Vec<u32>, FpeError> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                self.index_of(c)
                    .ok_or(FpeError::SymbolNotInAlphabet { position })
            })
            .collect()
    }

    /// Convert numeral values back into text.
    pub fn to_text(&self, numerals: &[u32]) -> String {
        numerals.iter().map(|&n| self.symbol(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_bounds_enforced() {
        assert_eq!(Alphabet::new(1), Err(FpeError::InvalidRadix(1)));
        assert_eq!(Alphabet::new(63), Err(FpeError::InvalidRadix(63)));
        assert!(Alphabet::new(2).is_ok());
        assert!(Alphabet::new(62).is_ok());
    }

    #[test]
    fn radix_52_stops_before_q() {
        let a = Alphabet::new(52).unwrap();
        assert_eq!(a.index_of('0'), Some(0));
        assert_eq!(a.index_of('z'), Some(35));
        assert_eq!(a.index_of('A'), Some(36));
        assert_eq!(a.index_of('P'), Some(51));
        for c in 'Q'..='Z' {
            assert_eq!(a.index_of(c), None, "{c} must be outside radix 52");
        }
    }

    #[test]
    fn numerals_round_trip() {
        let a = Alphabet::new(26).unwrap();
        let numerals = a.to_numerals("0123456789abcdefghi").unwrap();
        assert_eq!(numerals[18], 18);
        assert_eq!(a.to_text(&numerals), "0123456789abcdefghi");
    }

    #[test]
    fn to_numerals_reports_position() {
        let a = Alphabet::new(10).unwrap();
        assert_eq!(
            a.to_numerals("12a4"),
            Err(FpeError::SymbolNotInAlphabet { position: 2 })
        );
    }
}
