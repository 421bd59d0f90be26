//! Montgomery-domain arithmetic for the NIST P-256 base field
//!
//! `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`. Every [`FieldElement`] the rest of
//! this crate touches is assumed to already be in Montgomery form (`a*R mod
//! p`, `R = 2^256`); only [`FieldElement::to_montgomery`] and
//! [`FieldElement::from_montgomery`] cross that boundary, and nothing
//! outside this module and `point`/`combinator` should call them.
//!
//! The reduction step exploits the same structural shortcut RustCrypto's
//! p256 field arithmetic documents: `p`'s low limb is `2^64 - 1` and its
//! third limb is zero, and `-p^{-1} mod 2^64` happens to be `1`, which
//! collapses the general CIOS multiplicand `k = a[i] * p' mod 2^64` down to
//! `k = a[i]`.

use crate::ct::{adc, mac, sbb};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// `p` in little-endian 64-bit limbs.
pub const MODULUS: [u64; 4] = [
    0xffffffffffffffff,
    0x00000000ffffffff,
    0x0000000000000000,
    0xffffffff00000001,
];

/// `R mod p`, i.e. the Montgomery representation of `1`.
pub const ONE: [u64; 4] = [
    0x0000000000000001,
    0xffffffff00000000,
    0xffffffffffffffff,
    0x00000000fffffffe,
];

/// `R^2 mod p`, used to move values into Montgomery form.
pub const R2: [u64; 4] = [
    0x0000000000000003,
    0xfffffffbffffffff,
    0xfffffffffffffffe,
    0x00000004fffffffd,
];

/// `-3 mod p` in Montgomery form (the curve's `a` coefficient).
pub const A_MONT: [u64; 4] = [
    0xfffffffffffffffc,
    0x00000003ffffffff,
    0x0000000000000000,
    0xfffffffc00000004,
];

/// The curve's `b` coefficient in Montgomery form.
pub const B_MONT: [u64; 4] = [
    0xd89cdf6229c4bddf,
    0xacf005cd78843090,
    0xe5a220abf7212ed6,
    0xdc30061d04874834,
];

/// An element of the P-256 base field, always held in Montgomery form.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct FieldElement(pub(crate) [u64; 4]);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0]);
    pub const ONE: FieldElement = FieldElement(ONE);
    pub const A: FieldElement = FieldElement(A_MONT);
    pub const B: FieldElement = FieldElement(B_MONT);

    /// Lifts canonical little-endian limbs into Montgomery form.
    pub fn to_montgomery(limbs: [u64; 4]) -> FieldElement {
        FieldElement(mul_limbs(&limbs, &R2))
    }

    /// Lowers this element out of Montgomery form into canonical limbs.
    pub fn from_montgomery(&self) -> [u64; 4] {
        montgomery_reduce(&[self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0])
    }

    pub fn add(&self, other: &FieldElement) -> FieldElement {
        FieldElement(add_limbs(&self.0, &other.0))
    }

    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        FieldElement(sub_limbs(&self.0, &other.0))
    }

    pub fn neg(&self) -> FieldElement {
        FieldElement(sub_limbs(&[0, 0, 0, 0], &self.0))
    }

    /// `2*a`.
    pub fn double(&self) -> FieldElement {
        self.add(self)
    }

    /// `3*a`.
    pub fn triple(&self) -> FieldElement {
        self.double().add(self)
    }

    /// `a/2`, by adding `p` when `a` is odd before shifting right.
    ///
    /// `p` is odd, so `a + p` is even exactly when `a` is odd; the low bit
    /// selects the addend via a mask rather than a branch.
    pub fn halve(&self) -> FieldElement {
        let is_odd = crate::ct::mask64(self.0[0] & 1 == 1);
        let add_p = [
            MODULUS[0] & is_odd,
            MODULUS[1] & is_odd,
            MODULUS[2] & is_odd,
            MODULUS[3] & is_odd,
        ];
        let (w0, c) = adc(self.0[0], add_p[0], 0);
        let (w1, c) = adc(self.0[1], add_p[1], c);
        let (w2, c) = adc(self.0[2], add_p[2], c);
        let (w3, overflow) = adc(self.0[3], add_p[3], c);

        let w0 = (w0 >> 1) | (w1 << 63);
        let w1 = (w1 >> 1) | (w2 << 63);
        let w2 = (w2 >> 1) | (w3 << 63);
        let w3 = (w3 >> 1) | (overflow << 63);
        FieldElement([w0, w1, w2, w3])
    }

    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        FieldElement(mul_limbs(&self.0, &other.0))
    }

    pub fn square(&self) -> FieldElement {
        FieldElement(square_limbs(&self.0))
    }

    /// `a^(2^n)`, `n` repeated squarings.
    pub fn square_n(&self, n: u32) -> FieldElement {
        let mut r = *self;
        for _ in 0..n {
            r = r.square();
        }
        r
    }

    pub fn is_zero(&self) -> Choice {
        self.0.ct_eq(&[0, 0, 0, 0])
    }

    pub fn conditional_negate(&self, negate: Choice) -> FieldElement {
        let negated = self.neg();
        let mut out = [0u64; 4];
        for i in 0..4 {
            out[i] = u64::conditional_select(&self.0[i], &negated.0[i], negate);
        }
        FieldElement(out)
    }

    /// Field inversion via Fermat's little theorem: `a^(p-2) = a^-1 mod p`.
    ///
    /// Fixed addition chain, independent of the value of `a`: 255
    /// squarings and 13 multiplications, derived from `p-2`'s bit pattern
    /// (a run of thirty-two `1` bits, a run of thirty-two `0` bits, two
    /// more runs of thirty-two `1` bits, then thirty zero bits, a single
    /// `0` bit and a single `1` bit).
    pub fn invert(&self) -> FieldElement {
        let x1 = *self;
        let x2 = x1.square().mul(&x1);
        let x4 = x2.square_n(2).mul(&x2);
        let x8 = x4.square_n(4).mul(&x4);
        let x16 = x8.square_n(8).mul(&x8);
        let x32 = x16.square_n(16).mul(&x16);

        let mut r = x32;
        r = r.square_n(32).mul(&x1);
        r = r.square_n(96);
        r = r.square_n(32).mul(&x32);
        r = r.square_n(32).mul(&x32);
        r = r.square_n(16).mul(&x16);
        r = r.square_n(8).mul(&x8);
        r = r.square_n(4).mul(&x4);
        r = r.square_n(2).mul(&x2);
        r = r.square_n(1);
        r = r.square_n(1).mul(&x1);
        r
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(crate::ct::select_limbs(&a.0, &b.0, choice))
    }
}

/// `a + b mod p`. Bit 256 of `p+p` never sets, but the raw sum can still
/// need a conditional subtraction of `p`.
const fn add_limbs(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (w0, c) = adc(a[0], b[0], 0);
    let (w1, c) = adc(a[1], b[1], c);
    let (w2, c) = adc(a[2], b[2], c);
    let (w3, w4) = adc(a[3], b[3], c);
    sub_inner(&[w0, w1, w2, w3, w4])
}

/// `a - b mod p`.
const fn sub_limbs(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (w0, borrow) = sbb(a[0], b[0], 0);
    let (w1, borrow) = sbb(a[1], b[1], borrow);
    let (w2, borrow) = sbb(a[2], b[2], borrow);
    let (w3, borrow) = sbb(a[3], b[3], borrow);

    let (w0, c) = adc(w0, MODULUS[0] & borrow, 0);
    let (w1, c) = adc(w1, MODULUS[1] & borrow, c);
    let (w2, c) = adc(w2, MODULUS[2] & borrow, c);
    let (w3, _) = adc(w3, MODULUS[3] & borrow, c);
    [w0, w1, w2, w3]
}

/// Conditionally subtract `p` from a 5-limb sum (limb 4 holds any carry
/// out of the addition, which can only ever be 0 or 1 here).
const fn sub_inner(w: &[u64; 5]) -> [u64; 4] {
    let (w0, borrow) = sbb(w[0], MODULUS[0], 0);
    let (w1, borrow) = sbb(w[1], MODULUS[1], borrow);
    let (w2, borrow) = sbb(w[2], MODULUS[2], borrow);
    let (w3, borrow) = sbb(w[3], MODULUS[3], borrow);
    let (_, borrow) = sbb(w[4], 0, borrow);

    let (w0, c) = adc(w0, MODULUS[0] & borrow, 0);
    let (w1, c) = adc(w1, MODULUS[1] & borrow, c);
    let (w2, c) = adc(w2, MODULUS[2] & borrow, c);
    let (w3, _) = adc(w3, MODULUS[3] & borrow, c);
    [w0, w1, w2, w3]
}

/// 4-limb by 4-limb schoolbook multiply into an 8-limb product, immediately
/// reduced back into the Montgomery domain.
const fn mul_limbs(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (w0, carry) = mac(0, a[0], b[0], 0);
    let (w1, carry) = mac(0, a[0], b[1], carry);
    let (w2, carry) = mac(0, a[0], b[2], carry);
    let (w3, w4) = mac(0, a[0], b[3], carry);

    let (w1, carry) = mac(w1, a[1], b[0], 0);
    let (w2, carry) = mac(w2, a[1], b[1], carry);
    let (w3, carry) = mac(w3, a[1], b[2], carry);
    let (w4, w5) = mac(w4, a[1], b[3], carry);

    let (w2, carry) = mac(w2, a[2], b[0], 0);
    let (w3, carry) = mac(w3, a[2], b[1], carry);
    let (w4, carry) = mac(w4, a[2], b[2], carry);
    let (w5, w6) = mac(w5, a[2], b[3], carry);

    let (w3, carry) = mac(w3, a[3], b[0], 0);
    let (w4, carry) = mac(w4, a[3], b[1], carry);
    let (w5, carry) = mac(w5, a[3], b[2], carry);
    let (w6, w7) = mac(w6, a[3], b[3], carry);

    montgomery_reduce(&[w0, w1, w2, w3, w4, w5, w6, w7])
}

/// Squaring is multiplication with both operands equal; the schoolbook
/// multiply above is already reused rather than duplicating its carry
/// chains with a cross-term-doubling variant.
const fn square_limbs(a: &[u64; 4]) -> [u64; 4] {
    mul_limbs(a, a)
}

/// Word-by-word Montgomery reduction (Handbook of Applied Cryptography,
/// Algorithm 14.32), specialized to `p' = 1` and `MODULUS[2] = 0`.
const fn montgomery_reduce(r: &[u64; 8]) -> [u64; 4] {
    let r0 = r[0];
    let r1 = r[1];
    let r2 = r[2];
    let r3 = r[3];
    let r4 = r[4];
    let r5 = r[5];
    let r6 = r[6];
    let r7 = r[7];

    let (r1, carry) = mac(r1, r0, MODULUS[1], r0);
    let (r2, carry) = adc(r2, 0, carry);
    let (r3, carry) = mac(r3, r0, MODULUS[3], carry);
    let (r4, carry2) = adc(r4, 0, carry);

    let (r2, carry) = mac(r2, r1, MODULUS[1], r1);
    let (r3, carry) = adc(r3, 0, carry);
    let (r4, carry) = mac(r4, r1, MODULUS[3], carry);
    let (r5, carry2) = adc(r5, carry2, carry);

    let (r3, carry) = mac(r3, r2, MODULUS[1], r2);
    let (r4, carry) = adc(r4, 0, carry);
    let (r5, carry) = mac(r5, r2, MODULUS[3], carry);
    let (r6, carry2) = adc(r6, carry2, carry);

    let (r4, carry) = mac(r4, r3, MODULUS[1], r3);
    let (r5, carry) = adc(r5, 0, carry);
    let (r6, carry) = mac(r6, r3, MODULUS[3], carry);
    let (r7, r8) = adc(r7, carry2, carry);

    sub_inner(&[r4, r5, r6, r7, r8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one() -> FieldElement {
        FieldElement::ONE
    }

    #[test]
    fn one_round_trips_through_montgomery() {
        let canonical = one().from_montgomery();
        assert_eq!(canonical, [1, 0, 0, 0]);
        assert_eq!(FieldElement::to_montgomery(canonical).0, ONE);
    }

    #[test]
    fn add_then_sub_is_identity() {
        let a = FieldElement::to_montgomery([0x1234_5678, 0, 0, 0]);
        let b = FieldElement::to_montgomery([0x89ab_cdef, 1, 0, 0]);
        let sum = a.add(&b);
        assert_eq!(sum.sub(&b).0, a.0);
    }

    #[test]
    fn double_matches_add_self() {
        let a = FieldElement::to_montgomery([7, 0, 0, 0]);
        assert_eq!(a.double().0, a.add(&a).0);
    }

    #[test]
    fn triple_matches_add_add() {
        let a = FieldElement::to_montgomery([11, 0, 0, 0]);
        assert_eq!(a.triple().0, a.add(&a).add(&a).0);
    }

    #[test]
    fn halve_then_double_is_identity() {
        let a = FieldElement::to_montgomery([123456, 0, 0, 0]);
        assert_eq!(a.halve().double().0, a.0);
    }

    #[test]
    fn square_matches_self_multiply() {
        let a = FieldElement::to_montgomery([9999, 0, 0, 0]);
        assert_eq!(a.square().0, a.mul(&a).0);
    }

    #[test]
    fn invert_of_one_is_one() {
        assert_eq!(one().invert().0, one().0);
    }

    #[test]
    fn invert_then_multiply_is_one() {
        let a = FieldElement::to_montgomery([424242, 0, 0, 0]);
        let inv = a.invert();
        assert_eq!(a.mul(&inv).0, one().0);
    }

    #[test]
    fn neg_of_zero_is_zero() {
        assert_eq!(FieldElement::ZERO.neg().0, FieldElement::ZERO.0);
    }

    #[test]
    fn is_zero_detects_zero_only() {
        assert_eq!(bool::from(FieldElement::ZERO.is_zero()), true);
        assert_eq!(bool::from(one().is_zero()), false);
    }
}
