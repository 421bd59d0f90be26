//! Fixed-base comb scalar multiplication against the standard generator,
//! `w=7`.
//!
//! The precomputed table (see [`crate::generator_table`]) already holds
//! `(k+1) * 2^(7i) * G` for every row `i` and column `k`, so evaluating
//! `k * G` needs no further doubling: recode `k` into 37 signed 7-bit
//! digits, pick one table entry per row at constant time, and sum the 37
//! selected points.

use crate::generator_table;
use crate::point::Jacobian;
use crate::recode::{self, Digit, FIXED_BASE_ROWS, FIXED_BASE_WINDOW};
use crate::scalar::Scalar;

/// Computes `k * G` for this crate's standard generator at constant time
/// with respect to `k`.
pub fn scalar_mul(k: &Scalar) -> Jacobian {
    let table = generator_table::table();
    let digits: [Digit; FIXED_BASE_ROWS] = recode::recode(k, FIXED_BASE_WINDOW);

    let selected0 = recode::select_affine(&table[0], &digits[0]);
    let mut acc = selected0.to_jacobian();
    for i in 1..FIXED_BASE_ROWS {
        let selected = recode::select_affine(&table[i], &digits[i]);
        acc = acc.add_mixed(&selected);
    }
    acc
}
