//! Minimal scalar container.
//!
//! This stands in for the arbitrary-precision integer type the combinator
//! treats as an external collaborator: a 256-bit unsigned magnitude plus a
//! sign flag, with exactly the surface the ladders and recoding need
//! (`bit`, `bit_length`, `limbs`, and reduction modulo the curve order).
//! It is deliberately not a general bignum — no
//! arbitrary-width growth, no arithmetic beyond what scalar multiplication
//! requires.

use num_bigint::BigUint;

/// A 256-bit scalar, little-endian limbs, with an explicit sign.
///
/// The sign exists so callers that already hold a negative coefficient
/// (e.g. from Booth recoding upstream of this crate) don't need to
/// pre-reduce it themselves; [`Scalar::reduce_mod_n`] folds it into
/// `[0, n)` canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scalar {
    limbs: [u64; 4],
    negative: bool,
}

impl Scalar {
    pub const ZERO: Scalar = Scalar {
        limbs: [0, 0, 0, 0],
        negative: false,
    };

    pub fn from_limbs(limbs: [u64; 4]) -> Scalar {
        Scalar {
            limbs,
            negative: false,
        }
    }

    pub fn from_u64(value: u64) -> Scalar {
        Scalar {
            limbs: [value, 0, 0, 0],
            negative: false,
        }
    }

    pub fn limbs(&self) -> [u64; 4] {
        self.limbs
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Index of the highest set bit, plus one; `0` for the zero scalar.
    pub fn bit_length(&self) -> u32 {
        for i in (0..4).rev() {
            if self.limbs[i] != 0 {
                return (i as u32) * 64 + (64 - self.limbs[i].leading_zeros());
            }
        }
        0
    }

    /// The bit at position `i`, as `0` or `1`. `i >= 256` reads as `0`,
    /// which lets the windowed ladders probe one bit past the top of the
    /// scalar without a bounds check on the caller's side.
    pub fn bit(&self, i: u32) -> u8 {
        if i >= 256 {
            return 0;
        }
        ((self.limbs[(i / 64) as usize] >> (i % 64)) & 1) as u8
    }

    /// Reduces this scalar modulo `n`, returning a non-negative result in
    /// `[0, n)`. Runs a schoolbook long division via `num-bigint`; this is
    /// the one place in the crate that is not constant-time, matching the
    /// boundary spec.md's design places around externally supplied,
    /// non-adaptive scalar material rather than secret per-bit state.
    pub fn reduce_mod_n(&self, n: &Scalar) -> Scalar {
        let modulus = n.to_biguint();
        let mut value = self.to_biguint_magnitude();
        value %= &modulus;
        if self.negative && value != BigUint::from(0u32) {
            value = &modulus - value;
        }
        Scalar {
            limbs: biguint_to_limbs(&value),
            negative: false,
        }
    }

    fn to_biguint_magnitude(&self) -> BigUint {
        let mut bytes = [0u8; 32];
        for (i, limb) in self.limbs.iter().enumerate() {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    fn to_biguint(&self) -> BigUint {
        self.to_biguint_magnitude()
    }
}

fn biguint_to_limbs(value: &BigUint) -> [u64; 4] {
    let bytes = value.to_bytes_le();
    let mut buf = [0u8; 32];
    let n = bytes.len().min(32);
    buf[..n].copy_from_slice(&bytes[..n]);
    let mut limbs = [0u64; 4];
    for i in 0..4 {
        limbs[i] = u64::from_le_bytes(buf[i * 8..i * 8 + 8].try_into().unwrap());
    }
    limbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_of_zero_is_zero() {
        assert_eq!(Scalar::ZERO.bit_length(), 0);
    }

    #[test]
    fn bit_length_of_one() {
        assert_eq!(Scalar::from_u64(1).bit_length(), 1);
    }

    #[test]
    fn bit_length_spans_limbs() {
        let s = Scalar::from_limbs([0, 0, 0, 1]);
        assert_eq!(s.bit_length(), 193);
    }

    #[test]
    fn bit_reads_past_top_as_zero() {
        let s = Scalar::from_u64(1);
        assert_eq!(s.bit(0), 1);
        assert_eq!(s.bit(1), 0);
        assert_eq!(s.bit(300), 0);
    }

    #[test]
    fn reduce_mod_n_is_idempotent() {
        let n = Scalar::from_u64(97);
        let a = Scalar::from_u64(250);
        let reduced = a.reduce_mod_n(&n);
        assert_eq!(reduced.limbs()[0], 250 % 97);
        assert_eq!(reduced.reduce_mod_n(&n), reduced);
    }
}
