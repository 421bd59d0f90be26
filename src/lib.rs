//! Constant-time scalar multiplication core for NIST P-256.
//!
//! Implements Montgomery-domain field arithmetic, the Jacobian group law,
//! Booth-style signed-digit recoding, and the two scalar-multiplication
//! ladders BoringSSL-style P-256 backends split their work into: a
//! fixed-base comb ladder (`w=7`) against the standard generator, and a
//! variable-base windowed ladder (`w=5`) for arbitrary points. The
//! combinator on top computes `k*G + Sum(k_i * P_i)` in one pass.
//!
//! Modules, leaves first:
//!
//! - [`field`] — Montgomery arithmetic mod `p` and field inversion.
//! - [`point`] — affine and Jacobian point types and the group law.
//! - [`recode`] — signed-digit recoding and constant-time table scanning.
//! - [`scalar`] — the crate-local 256-bit scalar container.
//! - [`group`] — curve/group metadata (`P256Group`).
//! - [`generator_table`] — the lazily built fixed-base comb table.
//! - [`variable_base`] / [`fixed_base`] — the two ladders.
//! - [`combinator`] — the public `mul`/`to_affine` entry points.
//! - [`error`] — the `Error`/`Result` types fallible entry points return.

pub mod combinator;
pub mod ct;
pub mod error;
pub mod field;
pub mod fixed_base;
pub mod generator_table;
pub mod group;
pub mod point;
pub mod random;
pub mod recode;
pub mod scalar;
pub mod variable_base;

pub use combinator::{mul, to_affine, Methods, METHODS};
pub use error::{Error, Result};
pub use group::P256Group;
pub use point::{Affine, Jacobian};
pub use scalar::Scalar;
