//! Variable-base windowed scalar multiplication, `w=5`.
//!
//! Builds a 16-entry table of `{1*P, 2*P, ..., 16*P}` for the caller's own
//! point (there is no precomputed table to reuse, unlike the fixed-base
//! ladder), recodes the scalar into 52 signed 5-bit digits, and runs a
//! double-and-add ladder most-significant digit first, scanning the whole
//! table on every step so the memory-access pattern never depends on the
//! digit.

use crate::point::{Affine, Jacobian};
use crate::recode::{self, Digit, VAR_BASE_DIGITS, VAR_BASE_TABLE_SIZE, VAR_BASE_WINDOW};
use crate::scalar::Scalar;

/// Builds `{1*point, ..., 16*point}`, each entry one mixed addition past
/// the previous — the minimal number of point operations for a
/// dense (non-doubling-based) table of this size.
fn build_table(point: &Affine) -> [Affine; VAR_BASE_TABLE_SIZE] {
    let mut jacobian_table = [point.to_jacobian(); VAR_BASE_TABLE_SIZE];
    for k in 1..VAR_BASE_TABLE_SIZE {
        jacobian_table[k] = jacobian_table[k - 1].add_mixed(point);
    }
    let mut table = [Affine::infinity(); VAR_BASE_TABLE_SIZE];
    for k in 0..VAR_BASE_TABLE_SIZE {
        table[k] = jacobian_table[k].to_affine();
    }
    table
}

/// Computes `k * point` at constant time with respect to `k`.
pub fn scalar_mul(k: &Scalar, point: &Affine) -> Jacobian {
    let table = build_table(point);
    let digits: [Digit; VAR_BASE_DIGITS] = recode::recode(k, VAR_BASE_WINDOW);

    let top = recode::select_affine(&table, &digits[VAR_BASE_DIGITS - 1]);
    let mut acc = top.to_jacobian();
    for i in (0..VAR_BASE_DIGITS - 1).rev() {
        for _ in 0..VAR_BASE_WINDOW {
            acc = acc.double();
        }
        let selected = recode::select_affine(&table, &digits[i]);
        acc = acc.add_mixed(&selected);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::P256Group;
    use subtle::ConstantTimeEq;

    #[test]
    fn scalar_mul_by_one_is_identity() {
        let g = *P256Group::new().generator().unwrap();
        let result = scalar_mul(&Scalar::from_u64(1), &g).to_affine();
        assert!(bool::from(result.x.ct_eq(&g.x)));
        assert!(bool::from(result.y.ct_eq(&g.y)));
    }

    #[test]
    fn scalar_mul_by_two_matches_double() {
        let g = *P256Group::new().generator().unwrap();
        let result = scalar_mul(&Scalar::from_u64(2), &g).to_affine();
        let doubled = g.to_jacobian().double().to_affine();
        assert!(bool::from(result.x.ct_eq(&doubled.x)));
        assert!(bool::from(result.y.ct_eq(&doubled.y)));
    }

    #[test]
    fn scalar_mul_by_zero_is_infinity() {
        let g = *P256Group::new().generator().unwrap();
        let result = scalar_mul(&Scalar::ZERO, &g);
        assert!(bool::from(result.is_infinity()));
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let g = *P256Group::new().generator().unwrap();
        let result = scalar_mul(&Scalar::from_u64(17), &g).to_affine();

        let mut acc = g.to_jacobian();
        for _ in 0..16 {
            acc = acc.add_mixed(&g);
        }
        let expected = acc.to_affine();
        assert!(bool::from(result.x.ct_eq(&expected.x)));
        assert!(bool::from(result.y.ct_eq(&expected.y)));
    }
}
