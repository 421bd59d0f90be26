//! Top-level entry points: `k*G + Sum(k_i * P_i)` and affine conversion.
//!
//! This is the only layer that can fail — everything it calls into
//! (`field`, `point`, `recode`, `variable_base`, `fixed_base`) is
//! infallible by construction. It is also the only layer that decides
//! *which* ladder to run: a `k` multiplying this group's own standard
//! generator takes the fixed-base comb path, everything else (including a
//! `k` against a generator-shaped but not bit-identical point) takes the
//! variable-base windowed ladder.

use crate::error::{Error, Result};
use crate::fixed_base;
use crate::group::P256Group;
use crate::point::{Affine, Jacobian};
use crate::scalar::Scalar;
use crate::variable_base;
use tracing::debug;

/// Upper bound on `points.len()`/`scalars.len()`, matching spec.md §4.7
/// step 2's "bounding `num <= 2^24` to preclude overflow" — the generator
/// term, when it falls back to the variable-base path, is conceptually
/// prepended to this list, so the same bound guards against an index or
/// length computation overflowing in a 32-bit-or-wider count downstream.
pub const MAX_NUM: usize = 1 << 24;

/// Computes `out_point = k*G + Sum_i(scalars[i] * points[i])`.
///
/// `k` is optional (a pure multi-scalar sum with no generator term);
/// `points` and `scalars` must have equal length.
pub fn mul(
    group: &P256Group,
    out_point: &mut Jacobian,
    k: Option<&Scalar>,
    points: &[Affine],
    scalars: &[Scalar],
) -> Result<()> {
    if points.len() != scalars.len() {
        return Err(Error::InternalBignum);
    }
    validate_num(points.len())?;

    let mut acc = Jacobian::INFINITY;

    if let Some(k) = k {
        let generator = group.generator().ok_or(Error::UndefinedGenerator)?;
        let k = k.reduce_mod_n(group.order());
        if group.is_standard_generator(generator) {
            acc = fixed_base::scalar_mul(&k);
        } else {
            debug!("generator mismatch, falling back to the variable-base ladder for k*G");
            acc = variable_base::scalar_mul(&k, generator);
        }
    }

    for (point, scalar) in points.iter().zip(scalars.iter()) {
        let scalar = scalar.reduce_mod_n(group.order());
        let term = variable_base::scalar_mul(&scalar, point);
        acc = acc.add(&term);
    }

    *out_point = acc;
    Ok(())
}

/// Rejects a term count above spec.md §4.7's `num <= 2^24` bound, split
/// out of `mul` so it's checkable directly against a plain `usize`
/// without constructing a `2^24`-entry slice in tests.
fn validate_num(num: usize) -> Result<()> {
    if num > MAX_NUM {
        return Err(Error::OutOfRange);
    }
    Ok(())
}

/// Converts a Jacobian point to affine, failing on the point at infinity
/// (which has no affine representative).
pub fn to_affine(_group: &P256Group, point: &Jacobian) -> Result<Affine> {
    if bool::from(point.is_infinity()) {
        return Err(Error::PointAtInfinity);
    }
    Ok(point.to_affine())
}

/// Method-descriptor aggregate, mirroring the dispatch-table shape some
/// embedders of this kind of core expect (function pointers rather than a
/// trait object, so there is no vtable indirection on the hot path).
pub struct Methods {
    pub mul: fn(&P256Group, &mut Jacobian, Option<&Scalar>, &[Affine], &[Scalar]) -> Result<()>,
    pub to_affine: fn(&P256Group, &Jacobian) -> Result<Affine>,
}

pub const METHODS: Methods = Methods {
    mul,
    to_affine,
};

#[cfg(test)]
mod tests {
    use super::*;
    use subtle::ConstantTimeEq;

    #[test]
    fn mul_with_only_generator_term() {
        let group = P256Group::new();
        let mut out = Jacobian::INFINITY;
        mul(&group, &mut out, Some(&Scalar::from_u64(1)), &[], &[]).unwrap();
        let result = to_affine(&group, &out).unwrap();
        let g = group.generator().unwrap();
        assert!(bool::from(result.x.ct_eq(&g.x)));
        assert!(bool::from(result.y.ct_eq(&g.y)));
    }

    #[test]
    fn mul_rejects_mismatched_lengths() {
        let group = P256Group::new();
        let mut out = Jacobian::INFINITY;
        let points = [*group.generator().unwrap()];
        let err = mul(&group, &mut out, None, &points, &[]).unwrap_err();
        assert_eq!(err, Error::InternalBignum);
    }

    #[test]
    fn mul_with_generator_and_extra_point_doubles() {
        let group = P256Group::new();
        let mut out = Jacobian::INFINITY;
        let points = [*group.generator().unwrap()];
        let scalars = [Scalar::from_u64(1)];
        mul(&group, &mut out, Some(&Scalar::from_u64(1)), &points, &scalars).unwrap();
        let result = to_affine(&group, &out).unwrap();
        let doubled = group.generator().unwrap().to_jacobian().double().to_affine();
        assert!(bool::from(result.x.ct_eq(&doubled.x)));
        assert!(bool::from(result.y.ct_eq(&doubled.y)));
    }

    #[test]
    fn mul_with_mismatched_generator_uses_variable_base_path() {
        let doubled_g = P256Group::new().generator().unwrap().to_jacobian().double().to_affine();
        let group = P256Group::with_generator(doubled_g);
        let mut out = Jacobian::INFINITY;
        mul(&group, &mut out, Some(&Scalar::from_u64(3)), &[], &[]).unwrap();
        let result = to_affine(&group, &out).unwrap();
        let expected = variable_base::scalar_mul(&Scalar::from_u64(3), &doubled_g).to_affine();
        assert!(bool::from(result.x.ct_eq(&expected.x)));
        assert!(bool::from(result.y.ct_eq(&expected.y)));
    }

    #[test]
    fn validate_num_rejects_only_above_the_2_pow_24_bound() {
        assert_eq!(validate_num(MAX_NUM), Ok(()));
        assert_eq!(validate_num(MAX_NUM + 1), Err(Error::OutOfRange));
    }

    #[test]
    fn mul_rejects_generator_term_against_a_generatorless_group() {
        let group = P256Group::without_generator();
        let mut out = Jacobian::INFINITY;
        let err = mul(&group, &mut out, Some(&Scalar::from_u64(1)), &[], &[]).unwrap_err();
        assert_eq!(err, Error::UndefinedGenerator);
    }

    #[test]
    fn mul_without_a_generator_term_still_works_on_a_generatorless_group() {
        let group = P256Group::without_generator();
        let mut out = Jacobian::INFINITY;
        let g = *P256Group::new().generator().unwrap();
        let points = [g];
        let scalars = [Scalar::from_u64(5)];
        mul(&group, &mut out, None, &points, &scalars).unwrap();
        let result = to_affine(&group, &out).unwrap();
        let expected = variable_base::scalar_mul(&Scalar::from_u64(5), &g).to_affine();
        assert!(bool::from(result.x.ct_eq(&expected.x)));
        assert!(bool::from(result.y.ct_eq(&expected.y)));
    }

    #[test]
    fn to_affine_rejects_infinity() {
        let group = P256Group::new();
        assert_eq!(
            to_affine(&group, &Jacobian::INFINITY).unwrap_err(),
            Error::PointAtInfinity
        );
    }
}
