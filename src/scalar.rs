use std::fmt::{Debug, Display};

use num::{Float, FromPrimitive};

/// Real scalars that can be used as polynomial coefficients.
///
/// This is automatically implemented for every type that satisfies the
/// bounds, in practice `f32` and `f64`.
pub trait RealScalar: Float + FromPrimitive + Debug + Display {}

impl<T: Float + FromPrimitive + Debug + Display> RealScalar for T {}

/// Sign helpers used by the root isolator.
///
/// Only the strict sign matters there, zero is never "positive" or
/// "negative", and `-0.0` compares equal to `0.0`.
pub(crate) trait StrictSign {
    /// `true` if both values are non-zero and have the same sign
    fn same_sign(&self, other: &Self) -> bool;

    /// `true` if both values are non-zero and have opposite signs
    fn opposite_sign(&self, other: &Self) -> bool;
}

impl<T: RealScalar> StrictSign for T {
    fn same_sign(&self, other: &Self) -> bool {
        (*self > T::zero() && *other > T::zero()) || (*self < T::zero() && *other < T::zero())
    }

    fn opposite_sign(&self, other: &Self) -> bool {
        (*self > T::zero() && *other < T::zero()) || (*self < T::zero() && *other > T::zero())
    }
}

#[cfg(test)]
mod test {
    use super::StrictSign;

    #[test]
    fn same_sign() {
        assert!(1.0_f64.same_sign(&3.0));
        assert!((-1.0_f64).same_sign(&-0.5));
        assert!(!1.0_f64.same_sign(&-3.0));
        assert!(!0.0_f64.same_sign(&0.0));
        assert!(!(-0.0_f64).same_sign(&-1.0));
    }

    #[test]
    fn opposite_sign() {
        assert!(1.0_f64.opposite_sign(&-3.0));
        assert!((-1.0_f64).opposite_sign(&0.5));
        assert!(!1.0_f64.opposite_sign(&3.0));
        assert!(!0.0_f64.opposite_sign(&-1.0));
        assert!(!f64::NAN.opposite_sign(&1.0));
    }
}
