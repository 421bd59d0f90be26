//! Curve/group metadata.
//!
//! Stands in for the externally owned group object the combinator
//! consults to decide whether `k` is being multiplied against this crate's
//! own standard generator (and can therefore use the fast fixed-base comb
//! path) or an arbitrary point (which always goes through the
//! variable-base ladder).

use crate::field::FieldElement;
use crate::point::Affine;
use crate::scalar::Scalar;
use subtle::ConstantTimeEq;

/// NIST P-256 group order `n`.
pub const ORDER_N: [u64; 4] = [
    0xf3b9cac2fc632551,
    0xbce6faada7179e84,
    0xffffffffffffffff,
    0xffffffff00000000,
];

fn standard_generator() -> Affine {
    let x = FieldElement::to_montgomery([
        0x79e730d418a9143c,
        0x75ba95fc5fedb601,
        0x79fb732b77622510,
        0x18905f76a53755c6,
    ]);
    let y = FieldElement::to_montgomery([
        0xddf25357ce95560a,
        0x8b4ab8e4ba19e45c,
        0xd2e88688dd21f325,
        0x8571ff1825885d85,
    ]);
    Affine::new(x, y)
}

/// The curve order plus an optional generator, standing in for the
/// externally owned curve/group metadata object spec.md treats as out of
/// scope. The generator is optional because spec.md §7 names
/// `UndefinedGenerator` as a real error kind: a group object handed to the
/// combinator is not guaranteed to carry one (e.g. a group constructed
/// purely for variable-base multi-scalar use), and `mul` must reject a
/// generator-term request (`k` supplied) against such a group rather than
/// silently treating `None` as some default point.
#[derive(Clone, Copy)]
pub struct P256Group {
    order: Scalar,
    generator: Option<Affine>,
}

impl P256Group {
    /// The standard NIST P-256 group: order `n`, generator `G`.
    pub fn new() -> P256Group {
        P256Group {
            order: Scalar::from_limbs(ORDER_N),
            generator: Some(standard_generator()),
        }
    }

    /// The same curve order, but carrying `generator` instead of the
    /// standard point. Exists so callers that construct their own group
    /// object (and may or may not pass this crate's own generator back
    /// in) take the variable-base fallback path in the combinator rather
    /// than the fixed-base comb table, exactly as spec.md's combinator
    /// design calls for.
    pub fn with_generator(generator: Affine) -> P256Group {
        P256Group {
            order: Scalar::from_limbs(ORDER_N),
            generator: Some(generator),
        }
    }

    /// The curve order with no generator at all. `combinator::mul` must
    /// reject any call that supplies a `k` term against a group built this
    /// way with `Error::UndefinedGenerator`.
    pub fn without_generator() -> P256Group {
        P256Group {
            order: Scalar::from_limbs(ORDER_N),
            generator: None,
        }
    }

    pub fn order(&self) -> &Scalar {
        &self.order
    }

    pub fn generator(&self) -> Option<&Affine> {
        self.generator.as_ref()
    }

    /// Whether `point` is bit-for-bit this crate's hard-coded standard
    /// generator — the check the combinator uses to decide whether `k·G`
    /// can run over the precomputed comb table.
    pub fn is_standard_generator(&self, point: &Affine) -> bool {
        let g = standard_generator();
        let same_x = point.x.ct_eq(&g.x);
        let same_y = point.y.ct_eq(&g.y);
        let neither_infinity = !bool::from(point.is_infinity()) && !bool::from(g.is_infinity());
        bool::from(same_x & same_y) && neither_infinity
    }
}

impl Default for P256Group {
    fn default() -> Self {
        P256Group::new()
    }
}
