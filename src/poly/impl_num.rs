// Implementation of traits related to numeric operations and operators

use std::ops::{Mul, Neg};

use crate::{util::linalg::convolve_1d, Error, Poly, RealScalar, Result};

impl<T: RealScalar> Poly<T> {
    /// Raise a polynomial to a non-negative integer power.
    ///
    /// ```
    /// use poly_real_roots::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].pow(2), poly![1.0, 4.0, 10.0, 12.0, 9.0]);
    /// assert_eq!(poly![1.0, 2.0, 3.0].pow(0), poly![1.0]);
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        // invariant: poly is normalized
        debug_assert!(self.is_normalized());

        if exponent == 0 {
            return Self::one();
        }

        if exponent == 1 {
            return self.clone();
        }

        // TODO: divide and conquer with powers of 2
        let mut res = Self::one();
        for _ in 0..exponent {
            res = res * self;
        }
        res
    }

    /// Same as [`Poly::pow`], but takes a signed exponent.
    ///
    /// # Errors
    /// - `InvalidArgument`: the exponent is negative, or does not fit in a `u32`
    ///
    /// ```
    /// use poly_real_roots::{poly, Error};
    ///
    /// assert_eq!(poly![0.0, 1.0].try_pow(3).unwrap(), poly![0.0, 0.0, 0.0, 1.0]);
    /// assert!(matches!(poly![0.0, 1.0].try_pow(-1), Err(Error::InvalidArgument(_))));
    /// ```
    pub fn try_pow(&self, exponent: i64) -> Result<Self> {
        if exponent < 0 {
            return Err(Error::InvalidArgument(format!(
                "exponent can't be negative, got {exponent}"
            )));
        }
        let exponent: u32 = exponent.try_into().map_err(|_| {
            Error::InvalidArgument(format!("exponent {exponent} is too large"))
        })?;
        Ok(self.pow(exponent))
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        if self.is_one() {
            return rhs;
        }
        if rhs.is_one() {
            return self;
        }

        let ret = convolve_1d(&self.0, &rhs.0);
        Self(ret).normalize()
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        self * rhs.clone()
    }
}

impl<T: RealScalar> Mul<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: Poly<T>) -> Self::Output {
        self.clone() * rhs
    }
}

impl<T: RealScalar> Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.into_iter().map(|c| -c).collect())
    }
}

impl<T: RealScalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
