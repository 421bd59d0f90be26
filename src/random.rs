//! Random scalar sampling for tests and benchmarks.
//!
//! Mirrors the teacher's own `RandomField` trait: a small, uniform
//! sampling surface kept separate from the core arithmetic so nothing in
//! `field`, `point`, `recode`, or either ladder ever depends on an RNG.

use crate::scalar::Scalar;
use rand::RngCore;

/// Types that can be sampled uniformly at random, for test and benchmark
/// use only.
pub trait RandomScalar {
    fn random(rng: &mut impl RngCore) -> Self;
}

impl RandomScalar for Scalar {
    fn random(rng: &mut impl RngCore) -> Scalar {
        let mut limbs = [0u64; 4];
        for limb in &mut limbs {
            *limb = rng.next_u64();
        }
        Scalar::from_limbs(limbs)
    }
}
