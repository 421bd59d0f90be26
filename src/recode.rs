//! Signed-digit (Booth-style) windowed recoding and constant-time table
//! scanning.
//!
//! A scalar is split into non-overlapping `w`-bit windows and then
//! rebalanced into signed digits in `[-2^(w-1), 2^(w-1)-1]` by carrying any
//! window whose raw value exceeds half its range into the next, higher
//! window — the same rebalancing trick used by fixed-window signed-digit
//! scalar recoders generally. Digit `0` stands for "select the identity
//! element"; every other digit's absolute value indexes a 1-based table of
//! precomputed odd-and-even positive multiples sized `2^(w-1)`.

use crate::point::Affine;
use crate::scalar::Scalar;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// One recoded digit: `sign` true means negative, `magnitude` is `0` (the
/// identity digit) or a 1-based index into a `2^(w-1)`-entry table.
#[derive(Clone, Copy, Debug)]
pub struct Digit {
    pub sign: Choice,
    pub magnitude: u8,
}

/// Recodes `scalar` into `windows` signed digits of width `w` bits each.
///
/// `windows` must be large enough that the final window has headroom to
/// absorb a trailing carry without overflow (true for `w=5` with 52
/// windows and `w=7` with 37 windows over a 256-bit scalar, both of which
/// leave at least 3 bits of slack in the top window).
pub fn recode<const N: usize>(scalar: &Scalar, w: u32) -> [Digit; N] {
    let half = 1u32 << (w - 1);
    let mut digits = [Digit {
        sign: Choice::from(0),
        magnitude: 0,
    }; N];
    let mut carry: u32 = 0;
    for i in 0..N {
        let mut raw: u32 = 0;
        for b in 0..w {
            raw |= (scalar.bit(i as u32 * w + b) as u32) << b;
        }
        let v = raw + carry;
        carry = (v + half) >> w;
        let signed = v as i32 - ((carry << w) as i32);
        digits[i] = Digit {
            sign: Choice::from((signed < 0) as u8),
            magnitude: signed.unsigned_abs() as u8,
        };
    }
    digits
}

/// Window size for the variable-base ladder.
pub const VAR_BASE_WINDOW: u32 = 5;
/// Number of digits covering a 256-bit scalar at `w=5`, with 4 bits of
/// carry headroom in the final window.
pub const VAR_BASE_DIGITS: usize = 52;
/// Table size for `w=5`: `2^(w-1)` positive multiples, `1*P..=16*P`.
pub const VAR_BASE_TABLE_SIZE: usize = 16;

/// Window size for the fixed-base comb ladder.
pub const FIXED_BASE_WINDOW: u32 = 7;
/// Number of comb rows covering a 256-bit scalar at `w=7`.
pub const FIXED_BASE_ROWS: usize = 37;
/// Table width per comb row: `2^(w-1)` positive multiples.
pub const FIXED_BASE_TABLE_SIZE: usize = 64;

/// Constant-time scan of a table of affine points: returns
/// `magnitude == 0 ? infinity : sign ? -table[magnitude-1] : table[magnitude-1]`,
/// touching every entry regardless of `digit` so the memory access pattern
/// carries no information about which index was selected.
pub fn select_affine(table: &[Affine], digit: &Digit) -> Affine {
    let mut result = Affine::infinity();
    for (i, candidate) in table.iter().enumerate() {
        let is_match = (digit.magnitude as u64).ct_eq(&((i + 1) as u64));
        result = Affine::conditional_select(&result, candidate, is_match);
    }
    result.negate_if(digit.sign)
}

impl Affine {
    /// Conditionally negates `self`, used by [`select_affine`] to apply a
    /// recoded digit's sign after the magnitude lookup.
    pub fn negate_if(&self, negate: Choice) -> Affine {
        Affine::conditional_select(self, &self.negate(), negate)
    }
}
