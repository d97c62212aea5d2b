//! Digit ⇄ letter substitution applied around the radix-52 cipher.
//!
//! The radix-52 alphabet is `0-9a-zA-P`, so the cipher's output may contain
//! digits but never `Q-Z`. Mapping each digit onto one of those ten unused
//! letters makes every ciphertext purely alphabetic, and the mapping can be
//! undone exactly because the cipher never emits the target letters itself.

use crate::error::TokenError;

/// Fixed bijection between the ten ASCII digits and `Q..=Z`.
#[derive(Debug)]
pub struct SubstitutionTable {
    forward: [char; 10],
}

/// The process-wide table. Built at compile time and never mutated.
pub static SUBSTITUTION_TABLE: SubstitutionTable = SubstitutionTable {
    forward: ['Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'],
};

impl SubstitutionTable {
    /// Letter substituted for `digit`, or `None` if `digit` is not `0..=9`.
    pub fn forward(&self, digit: char) -> Option<char> {
        digit.to_digit(10).map(|d| self.forward[d as usize])
    }

    /// Digit a substituted letter stands for, or `None` for any other char.
    pub fn inverse(&self, letter: char) -> Option<char> {
        self.forward
            .iter()
            .position(|&l| l == letter)
            .map(|d| char::from(b'0' + d as u8))
    }

    /// `(digit, letter)` pairs in digit order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.forward
            .iter()
            .enumerate()
            .map(|(d, &l)| (char::from(b'0' + d as u8), l))
    }
}

/// Replace every digit of the cipher output with its substitute letter.
///
/// Letters pass through unchanged.
///
/// # Errors
///
/// Returns [`TokenError::EncryptionDomain`] if the cipher produced anything
/// other than an ASCII digit or letter.
pub fn post_encrypt_transform(text: &str) -> Result<String, TokenError> {
    text.chars()
        .enumerate()
        .map(|(position, c)| match SUBSTITUTION_TABLE.forward(c) {
            Some(letter) => Ok(letter),
            None if c.is_ascii_alphabetic() => Ok(c),
            None => Err(TokenError::EncryptionDomain { position }),
        })
        .collect()
}

/// Restore substituted letters to digits before handing text to the cipher.
///
/// Letters outside `Q..=Z` were produced by the cipher itself and pass
/// through unchanged.
///
/// Only ASCII letters count. A non-ASCII letter such as `é` is rejected here
/// as [`ErrorKind::InvalidInput`](crate::ErrorKind::InvalidInput) instead of
/// being passed on to fail inside the cipher as
/// [`ErrorKind::UnderlyingCipher`](crate::ErrorKind::UnderlyingCipher).
///
/// # Errors
///
/// Returns [`TokenError::NonAlphabeticCiphertext`] if `text` contains
/// anything other than ASCII letters.
pub fn pre_decrypt_transform(text: &str) -> Result<String, TokenError> {
    text.chars()
        .map(|c| match SUBSTITUTION_TABLE.inverse(c) {
            Some(digit) => Ok(digit),
            None if c.is_ascii_alphabetic() => Ok(c),
            None => Err(TokenError::NonAlphabeticCiphertext),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Alphabet;
    use std::collections::HashSet;

    #[test]
    fn table_is_a_bijection_over_digits() {
        let letters: HashSet<char> = SUBSTITUTION_TABLE.pairs().map(|(_, l)| l).collect();
        assert_eq!(letters.len(), 10);
        for (digit, letter) in SUBSTITUTION_TABLE.pairs() {
            assert_eq!(SUBSTITUTION_TABLE.forward(digit), Some(letter));
            assert_eq!(SUBSTITUTION_TABLE.inverse(letter), Some(digit));
            assert!(!letter.is_ascii_digit());
        }
        let digits: String = SUBSTITUTION_TABLE.pairs().map(|(d, _)| d).collect();
        assert_eq!(digits, "0123456789");
    }

    #[test]
    fn targets_are_outside_the_radix_52_alphabet() {
        let alphabet = Alphabet::new(52).unwrap();
        for (_, letter) in SUBSTITUTION_TABLE.pairs() {
            assert_eq!(alphabet.index_of(letter), None);
        }
    }

    #[test]
    fn non_digits_have_no_substitute() {
        for c in ['a', 'Q', ' ', '٣', '½'] {
            assert_eq!(SUBSTITUTION_TABLE.forward(c), None, "{c}");
        }
        for c in ['0', 'a', 'P', 'q'] {
            assert_eq!(SUBSTITUTION_TABLE.inverse(c), None, "{c}");
        }
    }

    #[test]
    fn post_encrypt_replaces_digits_only() {
        assert_eq!(
            post_encrypt_transform("6Irhs6qFLLbFP6pb").unwrap(),
            "WIrhsWqFLLbFPWpb"
        );
        assert_eq!(post_encrypt_transform("0123456789").unwrap(), "QRSTUVWXYZ");
        assert_eq!(post_encrypt_transform("").unwrap(), "");
    }

    #[test]
    fn post_encrypt_rejects_foreign_symbols() {
        assert!(matches!(
            post_encrypt_transform("ab!d"),
            Err(TokenError::EncryptionDomain { position: 2 })
        ));
    }

    #[test]
    fn pre_decrypt_restores_digits() {
        assert_eq!(
            pre_decrypt_transform("IjKelwlRMiqljyYq").unwrap(),
            "IjKelwl1Miqljy8q"
        );
        assert_eq!(pre_decrypt_transform("QRSTUVWXYZ").unwrap(), "0123456789");
    }

    #[test]
    fn pre_decrypt_rejects_non_letters() {
        for input in ["IjKelwlRMiqljy1q", "abc def", "abc-", "abcé"] {
            assert!(
                matches!(
                    pre_decrypt_transform(input),
                    Err(TokenError::NonAlphabeticCiphertext)
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn transforms_invert_along_digit_path() {
        let substituted = post_encrypt_transform("0a95P").unwrap();
        assert_eq!(substituted, "QaZVP");
        assert_eq!(pre_decrypt_transform(&substituted).unwrap(), "0a95P");
    }
}
