//! Plaintext domain check.

/// `true` if every character of `text` is an ASCII digit.
///
/// The empty string is numeric; length limits belong to the cipher.
pub fn is_numeric(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        assert!(is_numeric("4147000000001234"));
        assert!(is_numeric(""));
        assert!(!is_numeric("414700000000123x"));
        assert!(!is_numeric("4147 0000"));
        assert!(!is_numeric("-1"));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        assert!(!is_numeric("١٢٣"));
        assert!(!is_numeric("½"));
    }
}
