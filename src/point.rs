//! Affine and Jacobian point representations and the group law.
//!
//! Jacobian triples `(X, Y, Z)` represent the affine point `(X/Z^2,
//! Y/Z^3)`; `Z == 0` is the point at infinity (GECC 3.2). Doubling uses the
//! `a == -3` optimization P-256 is built for; general addition and mixed
//! Jacobian+affine addition both compute their result unconditionally and
//! then `conditional_select` the exceptional cases (either operand
//! infinite, the two operands equal, the two operands mutual negatives) in
//! so that no branch in this file depends on point values.

use crate::field::FieldElement;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// An affine point `(x, y)`, or the point at infinity when `infinity` is
/// true.
#[derive(Clone, Copy, Debug)]
pub struct Affine {
    pub x: FieldElement,
    pub y: FieldElement,
    pub infinity: Choice,
}

impl Affine {
    pub fn new(x: FieldElement, y: FieldElement) -> Affine {
        Affine {
            x,
            y,
            infinity: Choice::from(0),
        }
    }

    pub fn infinity() -> Affine {
        Affine {
            x: FieldElement::ZERO,
            y: FieldElement::ZERO,
            infinity: Choice::from(1),
        }
    }

    pub fn is_infinity(&self) -> Choice {
        self.infinity
    }

    pub fn negate(&self) -> Affine {
        Affine {
            x: self.x,
            y: self.y.conditional_negate(Choice::from(1)),
            infinity: self.infinity,
        }
    }

    pub fn to_jacobian(&self) -> Jacobian {
        let z = FieldElement::conditional_select(&FieldElement::ONE, &FieldElement::ZERO, self.infinity);
        Jacobian {
            x: self.x,
            y: self.y,
            z,
        }
    }
}

impl ConditionallySelectable for Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Affine {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

/// A point in Jacobian coordinates. `z.is_zero()` marks the point at
/// infinity; `x`/`y` are then unconstrained (by convention left at `(0,
/// 1)`).
#[derive(Clone, Copy, Debug)]
pub struct Jacobian {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
}

impl Jacobian {
    pub const INFINITY: Jacobian = Jacobian {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub fn is_infinity(&self) -> Choice {
        self.z.is_zero()
    }

    pub fn negate(&self) -> Jacobian {
        Jacobian {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    /// `2*P`, using the `a = -3` specialization (4M + 4S).
    pub fn double(&self) -> Jacobian {
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);
        let x_minus_delta = self.x.sub(&delta);
        let x_plus_delta = self.x.add(&delta);
        let alpha = x_minus_delta.mul(&x_plus_delta).triple();

        let beta8 = beta.double().double().double();
        let x3 = alpha.square().sub(&beta8);

        let y_plus_z = self.y.add(&self.z);
        let z3 = y_plus_z.square().sub(&gamma).sub(&delta);

        let beta4 = beta.double().double();
        let gamma2 = gamma.square();
        let gamma2_8 = gamma2.double().double().double();
        let y3 = alpha.mul(&beta4.sub(&x3)).sub(&gamma2_8);

        let doubled = Jacobian {
            x: x3,
            y: y3,
            z: z3,
        };
        Jacobian::conditional_select(&doubled, &Jacobian::INFINITY, self.is_infinity())
    }

    /// `P + Q`, general Jacobian addition (add-2007-bl), masked for the
    /// exceptional cases: either operand infinite, `P == Q`, `P == -Q`.
    pub fn add(&self, other: &Jacobian) -> Jacobian {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        let h = u2.sub(&u1);
        let i = h.double().square();
        let j = h.mul(&i);
        let r = s2.sub(&s1).double();
        let v = u1.mul(&i);

        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&j).double());
        let z_sum = self.z.add(&other.z);
        let z3 = z_sum.square().sub(&z1z1).sub(&z2z2).mul(&h);

        let general = Jacobian {
            x: x3,
            y: y3,
            z: z3,
        };

        // `U1`/`U2` (and `S1`/`S2`) are each scaled by the other operand's
        // `Z^2`, so when either operand is infinity (`Z = 0`) they
        // spuriously collapse to equal (both zero) regardless of the
        // operands' real coordinates. The double/negation masks must only
        // fire when both operands are actual finite points, or they'd
        // misfire and override the infinity handling below.
        let both_finite = !self.is_infinity() & !other.is_infinity();
        let same_x = u1.ct_eq(&u2) & both_finite;
        let same_y = s1.ct_eq(&s2) & both_finite;
        let is_double = same_x & same_y;
        let is_negation = same_x & !same_y;

        let mut result = Jacobian::conditional_select(&general, self, other.is_infinity());
        result = Jacobian::conditional_select(&result, other, self.is_infinity());
        result = Jacobian::conditional_select(&result, &self.double(), is_double);
        result = Jacobian::conditional_select(&result, &Jacobian::INFINITY, is_negation);
        result
    }

    /// `P + Q` with `Q` affine (madd-2007-bl), masked the same way as
    /// [`Jacobian::add`].
    pub fn add_mixed(&self, other: &Affine) -> Jacobian {
        let z1z1 = self.z.square();
        let u2 = other.x.mul(&z1z1);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        let h = u2.sub(&self.x);
        let hh = h.square();
        let i = hh.double().double();
        let j = h.mul(&i);
        let r = s2.sub(&self.y).double();
        let v = self.x.mul(&i);

        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&self.y.mul(&j).double());
        let z_plus_h = self.z.add(&h);
        let z3 = z_plus_h.square().sub(&z1z1).sub(&hh);

        let general = Jacobian {
            x: x3,
            y: y3,
            z: z3,
        };

        // Same reasoning as `Jacobian::add`: `U2`/`S2` (scaled by `self`'s
        // `Z^2`) or `self.x`/`self.y` themselves collapse spuriously when
        // either operand is infinity, so gate the double/negation masks on
        // both operands being finite.
        let both_finite = !self.is_infinity() & !other.is_infinity();
        let same_x = u2.ct_eq(&self.x) & both_finite;
        let same_y = s2.ct_eq(&self.y) & both_finite;
        let is_double = same_x & same_y;
        let is_negation = same_x & !same_y;

        let other_jacobian = other.to_jacobian();
        let mut result = Jacobian::conditional_select(&general, self, other.is_infinity());
        result = Jacobian::conditional_select(&result, &other_jacobian, self.is_infinity());
        result = Jacobian::conditional_select(&result, &self.double(), is_double);
        result = Jacobian::conditional_select(&result, &Jacobian::INFINITY, is_negation);
        result
    }

    /// Converts to affine coordinates. `infinity` is set when `self` is
    /// the point at infinity; `x`/`y` are then `(0, 0)` by convention.
    pub fn to_affine(&self) -> Affine {
        let is_inf = self.is_infinity();
        // `invert()` of zero returns zero (Fermat's theorem: 0^(p-2) = 0),
        // so the arithmetic below stays well-defined even at infinity; the
        // `conditional_select` against `Affine::infinity()` is what makes
        // the result correct.
        let z_inv = self.z.invert();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        let x = self.x.mul(&z_inv2);
        let y = self.y.mul(&z_inv3);
        Affine::conditional_select(&Affine::new(x, y), &Affine::infinity(), is_inf)
    }
}

impl ConditionallySelectable for Jacobian {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Jacobian {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
