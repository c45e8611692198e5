#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

#[cfg(test)]
mod macros;

#[cfg(any(test, feature = "bls-curve"))]
mod bls_curve;
mod polynomial;

pub use polynomial::Polynomial;

use std::ops::{AddAssign, MulAssign};

/// A value a polynomial can be evaluated at.
///
/// Powers of the evaluation point are accumulated in this type, so every
/// multiplication must already be reduced (e.g. a prime field element).
pub trait EvaluationPoint: Copy + MulAssign {
    fn one() -> Self
    where
        Self: Sized;
    fn from_u64(num: u64) -> Self
    where
        Self: Sized;
}

/// A polynomial coefficient that can be scaled by a power of an
/// [`EvaluationPoint`].
///
/// The scaled value lands in `Image`, which is where the terms are summed up.
/// For field elements `Image` is the field itself, for affine curve points it
/// is the projective representation of the same group.
pub trait Coefficient<S: EvaluationPoint> {
    type Image: Copy + AddAssign;

    fn zero_image() -> Self::Image;
    fn scale(&self, by: &S) -> Self::Image;
}
