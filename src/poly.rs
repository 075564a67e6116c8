use std::fmt::Display;

use num::{One, Zero};

use crate::{util::casting::usize_to_i32, RealScalar};

mod base;
mod calculus;
mod conversions;
mod impl_num;
mod indexing;
pub mod roots;

/// A real univariate polynomial, stored as its coefficients in ascending
/// order of degree, i.e. `poly![a0, a1, a2]` is `a0 + a1*x + a2*x^2`.
///
/// Polynomials are always normalized: there are no trailing zero
/// coefficients, except for the zero polynomial which is stored as `[0]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<T>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from its coefficients, lowest degree first.
    ///
    /// Trailing zeros are trimmed, an empty slice makes the zero polynomial.
    ///
    /// ```
    /// use poly_real_roots::Poly;
    ///
    /// let p = Poly::new(&[1.0, 2.0, 0.0, 0.0]);
    /// assert_eq!(p.degree(), 1);
    /// ```
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(vec![T::zero()])
    }

    #[must_use]
    pub fn one() -> Self {
        Self(vec![T::one()])
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_one()
    }

    /// The degree of the polynomial (the maximum exponent).
    ///
    /// Constants, including the zero polynomial, have degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.degree_raw()
    }

    /// The coefficient of the highest degree term
    #[must_use]
    pub fn leading_coefficient(&self) -> T {
        debug_assert!(self.is_normalized());
        self.last()
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// Terms are summed from the constant upwards, each computed as
    /// `c * x.powi(i)`.
    ///
    /// ```
    /// use poly_real_roots::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(1.0), 6.0);
    /// assert_eq!(p.eval(-1.0), 2.0);
    /// ```
    pub fn eval(&self, x: T) -> T {
        debug_assert!(self.is_normalized());
        self.0
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, c)| acc + *c * x.powi(usize_to_i32(i)))
    }

    /// Monic polynomial from its real roots.
    ///
    /// # Examples
    /// ```
    /// use poly_real_roots::{poly, Poly};
    ///
    /// let p = Poly::from_roots(&[-1.0, 0.0, 1.0]);
    /// assert_eq!(p, poly![0.0, -1.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        roots
            .iter()
            .map(|r| Self::new(&[-*r, T::one()]))
            .fold(Self::one(), |acc, x| acc * x)
    }
}

impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.0.iter().enumerate();
        if let Some((_, c)) = iter.next() {
            write!(f, "{c}")?;
        } else {
            return Ok(());
        }
        for (i, c) in iter {
            if *c >= T::zero() {
                write!(f, " + {c}*X^{i}")?;
            } else {
                write!(f, " - {}*X^{i}", -*c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{Poly, Poly64};

    #[test]
    fn new_trims_zeros() {
        let p = Poly::new(&[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.as_slice(), &[1.0, 2.0]);
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn new_all_zeros() {
        let p = Poly::new(&[0.0, 0.0, 0.0]);
        assert_eq!(p, Poly64::zero());
        assert_eq!(p.degree(), 0);
        assert!(p.is_zero());
    }

    #[test]
    fn new_empty() {
        let p = Poly64::new(&[]);
        assert_eq!(p.as_slice(), &[0.0]);
    }

    #[test]
    fn eval() {
        let p = poly![-6.0, 1.0, 1.0];
        assert_eq!(p.eval(2.0), 0.0);
        assert_eq!(p.eval(-3.0), 0.0);
        assert_eq!(p.eval(0.0), -6.0);
    }

    #[test]
    fn eval_nan() {
        let p = poly![1.0, 1.0];
        assert!(p.eval(f64::NAN).is_nan());
    }

    #[test]
    fn leading_coefficient() {
        assert_eq!(poly![1.0, 2.0, -3.0].leading_coefficient(), -3.0);
        assert_eq!(Poly64::zero().leading_coefficient(), 0.0);
    }

    #[test]
    fn from_roots() {
        assert_eq!(Poly64::from_roots(&[]), Poly64::one());
        assert_eq!(Poly::from_roots(&[2.0, -3.0]), poly![-6.0, 1.0, 1.0]);
    }

    #[test]
    fn display() {
        let p = poly![-2.0, 4.5, -5.0, 0.0, 7.0];
        assert_eq!(p.to_string(), "-2 + 4.5*X^1 - 5*X^2 + 0*X^3 + 7*X^4");
    }

    #[test]
    fn display_constant() {
        assert_eq!(Poly64::zero().to_string(), "0");
        assert_eq!(poly![-3.5].to_string(), "-3.5");
    }
}
