//! NIST P-256 test vectors and algebraic-law property tests.

use p256_mul_core::field::FieldElement;
use p256_mul_core::group::P256Group;
use p256_mul_core::point::Jacobian;
use p256_mul_core::scalar::Scalar;
use p256_mul_core::{combinator, fixed_base, variable_base};
use proptest::prelude::*;
use subtle::ConstantTimeEq;

const GX: [u64; 4] = [
    0x79e730d418a9143c,
    0x75ba95fc5fedb601,
    0x79fb732b77622510,
    0x18905f76a53755c6,
];
const GY: [u64; 4] = [
    0xddf25357ce95560a,
    0x8b4ab8e4ba19e45c,
    0xd2e88688dd21f325,
    0x8571ff1825885d85,
];

fn points_equal(a: p256_mul_core::point::Affine, b: p256_mul_core::point::Affine) -> bool {
    bool::from(a.x.ct_eq(&b.x)) && bool::from(a.y.ct_eq(&b.y))
}

#[test]
fn generator_matches_published_coordinates() {
    let group = P256Group::new();
    let g = group.generator().unwrap();
    assert_eq!(g.x.from_montgomery(), GX);
    assert_eq!(g.y.from_montgomery(), GY);
}

#[test]
fn n_times_generator_is_infinity() {
    let group = P256Group::new();
    let result = fixed_base::scalar_mul(group.order());
    assert!(bool::from(result.is_infinity()));
}

#[test]
fn n_minus_one_times_generator_is_negated_generator() {
    let group = P256Group::new();
    let order = group.order();
    let mut limbs = order.limbs();
    limbs[0] -= 1;
    let n_minus_one = Scalar::from_limbs(limbs);

    let result = fixed_base::scalar_mul(&n_minus_one).to_affine();
    let expected = group.generator().unwrap().negate();
    assert!(points_equal(result, expected));
}

#[test]
fn two_times_generator_matches_doubling() {
    let group = P256Group::new();
    let via_ladder = fixed_base::scalar_mul(&Scalar::from_u64(2)).to_affine();
    let via_double = group.generator().unwrap().to_jacobian().double().to_affine();
    assert!(points_equal(via_ladder, via_double));
}

#[test]
fn fixed_and_variable_base_agree_on_many_scalars() {
    let group = P256Group::new();
    let g = *group.generator().unwrap();
    for k in [3u64, 17, 255, 256, 65537, 0xdead_beef, 0xffff_ffff_ffff] {
        let scalar = Scalar::from_u64(k);
        let fixed = fixed_base::scalar_mul(&scalar).to_affine();
        let variable = variable_base::scalar_mul(&scalar, &g).to_affine();
        assert!(points_equal(fixed, variable), "mismatch at k={k}");
    }
}

#[test]
fn combinator_k_g_plus_k_p_matches_two_ladder_runs() {
    let group = P256Group::new();
    let g = *group.generator().unwrap();
    let k = Scalar::from_u64(12345);
    let k1 = Scalar::from_u64(67890);

    let mut out = Jacobian::INFINITY;
    combinator::mul(&group, &mut out, Some(&k), &[g], &[k1]).unwrap();
    let combined = combinator::to_affine(&group, &out).unwrap();

    let term0 = fixed_base::scalar_mul(&k);
    let term1 = variable_base::scalar_mul(&k1, &g);
    let expected = term0.add(&term1).to_affine();

    assert!(points_equal(combined, expected));
}

proptest! {
    #[test]
    fn field_add_is_commutative(a in any::<u64>(), b in any::<u64>()) {
        let fa = FieldElement::to_montgomery([a, 0, 0, 0]);
        let fb = FieldElement::to_montgomery([b, 0, 0, 0]);
        prop_assert_eq!(fa.add(&fb).from_montgomery(), fb.add(&fa).from_montgomery());
    }

    #[test]
    fn field_mul_distributes_over_add(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let fa = FieldElement::to_montgomery([a, 0, 0, 0]);
        let fb = FieldElement::to_montgomery([b, 0, 0, 0]);
        let fc = FieldElement::to_montgomery([c, 0, 0, 0]);
        let lhs = fa.mul(&fb.add(&fc));
        let rhs = fa.mul(&fb).add(&fa.mul(&fc));
        prop_assert_eq!(lhs.from_montgomery(), rhs.from_montgomery());
    }

    #[test]
    fn field_invert_is_a_multiplicative_inverse(a in 1u64..u64::MAX) {
        let fa = FieldElement::to_montgomery([a, 0, 0, 0]);
        let inv = fa.invert();
        prop_assert_eq!(fa.mul(&inv).from_montgomery(), [1, 0, 0, 0]);
    }

    #[test]
    fn scalar_mul_is_linear_in_k(a in 1u64..100_000, b in 1u64..100_000) {
        let group = P256Group::new();
        let g = *group.generator().unwrap();
        let sum_scalar = Scalar::from_u64(a + b);
        let lhs = variable_base::scalar_mul(&sum_scalar, &g).to_affine();

        let term_a = variable_base::scalar_mul(&Scalar::from_u64(a), &g);
        let term_b = variable_base::scalar_mul(&Scalar::from_u64(b), &g);
        let rhs = term_a.add(&term_b).to_affine();

        prop_assert!(points_equal(lhs, rhs));
    }
}
