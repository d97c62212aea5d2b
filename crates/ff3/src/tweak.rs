//! Tweak parsing for FF3 (64-bit) and FF3-1 (56-bit) tweaks.

use common::FpeError;
use zeroize::Zeroize;

/// Byte length of an FF3 tweak.
pub const FF3_TWEAK_LEN: usize = 8;

/// Byte length of an FF3-1 tweak.
pub const FF3_1_TWEAK_LEN: usize = 7;

/// Which revision of the algorithm a tweak selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Original FF3 with a 64-bit tweak.
    Ff3,
    /// FF3-1 with a 56-bit tweak.
    Ff3Rev1,
}

impl Variant {
    /// Smallest domain size `radix^minlen` the revision requires.
    pub(crate) fn min_domain(self) -> u128 {
        match self {
            Variant::Ff3 => 100,
            Variant::Ff3Rev1 => 1_000_000,
        }
    }
}

/// A tweak split into the two 32-bit halves fed to alternating rounds.
pub(crate) struct Tweak {
    pub(crate) left: [u8; 4],
    pub(crate) right: [u8; 4],
    pub(crate) variant: Variant,
}

impl Tweak {
    pub(crate) fn parse(tweak: &[u8]) -> Result<Self, FpeError> {
        match *tweak {
            [t0, t1, t2, t3, t4, t5, t6, t7] => Ok(Self {
                left: [t0, t1, t2, t3],
                right: [t4, t5, t6, t7],
                variant: Variant::Ff3,
            }),
            // T_L = T[0..28] || 0^4, T_R = T[32..56] || T[28..32] || 0^4
            [t0, t1, t2, t3, t4, t5, t6] => Ok(Self {
                left: [t0, t1, t2, t3 & 0xF0],
                right: [t4, t5, t6, (t3 & 0x0F) << 4],
                variant: Variant::Ff3Rev1,
            }),
            _ => Err(FpeError::InvalidTweakLength(tweak.len())),
        }
    }

    /// Half used by round `round`: `T_R` on even rounds, `T_L` on odd ones.
    pub(crate) fn for_round(&self, round: u8) -> &[u8; 4] {
        if round % 2 == 0 {
            &self.right
        } else {
            &self.left
        }
    }
}

impl Drop for Tweak {
    fn drop(&mut self) {
        self.left.zeroize();
        self.right.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ff3_tweak_splits_in_half() {
        let t = Tweak::parse(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(t.variant, Variant::Ff3);
        assert_eq!(t.left, [1, 2, 3, 4]);
        assert_eq!(t.right, [5, 6, 7, 8]);
        assert_eq!(t.for_round(0), &[5, 6, 7, 8]);
        assert_eq!(t.for_round(7), &[1, 2, 3, 4]);
    }

    #[test]
    fn ff3_1_tweak_shares_the_middle_byte() {
        let t = Tweak::parse(&[0x11, 0x22, 0x33, 0xAB, 0x44, 0x55, 0x66]).unwrap();
        assert_eq!(t.variant, Variant::Ff3Rev1);
        assert_eq!(t.left, [0x11, 0x22, 0x33, 0xA0]);
        assert_eq!(t.right, [0x44, 0x55, 0x66, 0xB0]);
    }

    #[test]
    fn other_lengths_rejected() {
        for len in [0, 6, 9, 16] {
            let bytes = vec![0u8; len];
            assert_eq!(
                Tweak::parse(&bytes).err(),
                Some(FpeError::InvalidTweakLength(len))
            );
        }
    }
}
