//! Error type for the combinator's fallible entry points.
//!
//! Everything below `combinator` in the stack (field, point, recode, the
//! two ladders) is infallible by construction: it is branch-free, so there
//! is nothing for it to fail on. Only the outer entry points that validate
//! caller-supplied inputs — mismatched slice lengths, an out-of-range
//! scalar, a generator that does not match the curve it claims to belong
//! to — return a `Result`.

use core::fmt;

/// Everything that can go wrong calling into this crate from the outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A scalar was not reduced modulo the group order where one was
    /// required.
    OutOfRange,
    /// An operation that requires an affine point received the point at
    /// infinity.
    PointAtInfinity,
    /// Lazy table construction or scalar reduction needed memory that
    /// could not be obtained.
    AllocationFailure,
    /// The caller-supplied `Scalar`/`Affine` container violated an
    /// invariant this crate relies on (e.g. the wrong limb count).
    InternalBignum,
    /// `k` was supplied but the group carries no generator to multiply it
    /// against.
    UndefinedGenerator,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::OutOfRange => "scalar out of range",
            Error::PointAtInfinity => "operation undefined at the point at infinity",
            Error::AllocationFailure => "allocation failure",
            Error::InternalBignum => "internal bignum invariant violated",
            Error::UndefinedGenerator => "no generator defined for this group",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
