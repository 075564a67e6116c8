use num::Zero;

use crate::{scalar::StrictSign, Error, Poly, RealScalar, Result};

/// Bisection on the closed interval `[left, right]`, `p` must be monotonic
/// on it.
///
/// Returns `None` if `p` does not change sign on the interval. Stops as soon
/// as the midpoint is exactly zero or stops changing.
///
/// # Errors
/// - `InvalidBound`: `left > right`
pub(super) fn bisect<T: RealScalar>(poly: &Poly<T>, mut left: T, mut right: T) -> Result<Option<T>> {
    debug_assert!(left <= right, "inverted bracket [{left:?}, {right:?}]");
    if left > right {
        return Err(Error::invalid_bound(left, right));
    }

    let left_value = poly.eval(left);
    if left_value.is_zero() {
        return Ok(Some(left));
    }

    let right_value = poly.eval(right);
    if right_value.is_zero() {
        return Ok(Some(right));
    }

    if left_value.same_sign(&right_value) {
        log::trace!("no sign change on [{left:?}, {right:?}]");
        return Ok(None);
    }

    let two = T::one() + T::one();
    let mut mid = left;
    loop {
        let next_mid = (left + right) / two;
        if bit_eq(next_mid, mid) {
            log::trace!("stopping because midpoint reached a fixpoint {{mid: {mid:?}}}");
            return Ok(Some(mid));
        }
        mid = next_mid;

        let mid_value = poly.eval(mid);
        if mid_value.is_zero() {
            return Ok(Some(mid));
        }

        if mid_value.same_sign(&poly.eval(left)) {
            left = mid;
        } else {
            right = mid;
        }
    }
}

/// Bit-level identity, unlike `==` it tells `0.0` and `-0.0` apart and
/// matches a NaN with itself.
fn bit_eq<T: RealScalar>(a: T, b: T) -> bool {
    a.integer_decode() == b.integer_decode()
}

#[cfg(test)]
mod test {
    use super::{bisect, bit_eq};
    use crate::Error;

    #[test]
    fn exact_root() {
        let p = poly![-1.0, 1.0];
        assert_eq!(bisect(&p, 0.0, 4.0).unwrap(), Some(1.0));
    }

    #[test]
    fn root_at_bounds() {
        let p = poly![-1.0, 1.0];
        assert_eq!(bisect(&p, 1.0, 3.0).unwrap(), Some(1.0));
        assert_eq!(bisect(&p, -3.0, 1.0).unwrap(), Some(1.0));
    }

    #[test]
    fn no_sign_change() {
        let p = poly![-1.0, 1.0];
        assert_eq!(bisect(&p, 2.0, 3.0).unwrap(), None);
        assert_eq!(bisect(&p, 2.0, 2.0).unwrap(), None);
    }

    #[test]
    fn irrational_root() {
        // x^2 - 2
        let p = poly![-2.0, 0.0, 1.0];
        let root = bisect(&p, 0.0, 2.0).unwrap().unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1E-15);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn inverted_bracket() {
        let p = poly![-1.0, 1.0];
        assert!(matches!(
            bisect(&p, 3.0, 0.0),
            Err(Error::InvalidBound { .. })
        ));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn inverted_bracket_error() {
        let p = poly![-1.0, 1.0];
        match bisect(&p, 3.0, 0.0) {
            Err(Error::InvalidBound { left, right }) => {
                assert_eq!((left, right), (3.0, 0.0));
            }
            other => panic!("expected an invalid bound, got {other:?}"),
        }
    }

    #[test]
    fn bit_identity() {
        assert!(bit_eq(1.5, 1.5));
        assert!(!bit_eq(0.0, -0.0));
        assert!(bit_eq(f64::NAN, f64::NAN));
    }
}
