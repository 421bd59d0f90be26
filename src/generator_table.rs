//! Precomputed generator multiples for the fixed-base comb ladder.
//!
//! Table generation itself is treated as an external collaborator (the
//! tooling that emits a literal data blob is out of scope), so the table
//! here is instead derived once, lazily, from the crate's own point
//! arithmetic starting at the hard-coded standard generator, and cached in
//! a [`OnceLock`]. Row `i`, column `k` holds `(k+1) * 2^(7i) * G` for `i`
//! in `0..37`, `k` in `0..64` — exactly the values `fixed_base`'s comb
//! ladder looks up by recoded digit magnitude.

use crate::group::P256Group;
use crate::point::Affine;
use crate::recode::{FIXED_BASE_ROWS, FIXED_BASE_TABLE_SIZE, FIXED_BASE_WINDOW};
use std::sync::OnceLock;

pub type Row = [Affine; FIXED_BASE_TABLE_SIZE];
pub type Table = [Row; FIXED_BASE_ROWS];

static TABLE: OnceLock<Table> = OnceLock::new();

/// Returns the `37x64` generator-multiple table, building it on first use.
pub fn table() -> &'static Table {
    TABLE.get_or_init(build_table)
}

fn build_table() -> Table {
    let generator = P256Group::new().generator().unwrap().to_jacobian();
    let empty_row = [Affine::infinity(); FIXED_BASE_TABLE_SIZE];
    let mut table = [empty_row; FIXED_BASE_ROWS];

    let mut row_base = generator;
    for i in 0..FIXED_BASE_ROWS {
        let mut acc = row_base;
        table[i][0] = acc.to_affine();
        for k in 1..FIXED_BASE_TABLE_SIZE {
            acc = acc.add(&row_base);
            table[i][k] = acc.to_affine();
        }
        if i + 1 < FIXED_BASE_ROWS {
            for _ in 0..FIXED_BASE_WINDOW {
                row_base = row_base.double();
            }
        }
    }
    table
}
