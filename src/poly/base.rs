use num::Zero;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            // zero-polynomials are stored as [0], never as []
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        if n == 1 {
            return true;
        }
        !self.0[n - 1].is_zero()
    }

    pub(crate) fn normalize(self) -> Self {
        if self.is_normalized() {
            return self;
        }
        let mut end = self.len_raw();
        loop {
            if end <= 1 {
                break;
            }
            if !self.0[end - 1].is_zero() {
                break;
            }
            end -= 1;
        }
        if end == 0 {
            return Self::zero();
        }
        let mut coeffs = self.0;
        coeffs.truncate(end);
        let ret = Self(coeffs);

        // post-condition: polynomial is now normalized
        debug_assert!(ret.is_normalized());
        ret
    }

    /// The last coefficient
    pub(crate) fn last(&self) -> T {
        self.0[self.len_raw() - 1]
    }

    /// Multiply every coefficient by `factor`
    ///
    /// ```
    /// use poly_real_roots::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0].scaled(3.0), poly![3.0, 6.0]);
    /// assert_eq!(poly![1.0, 2.0].scaled(0.0), poly![0.0]);
    /// ```
    #[must_use]
    pub fn scaled(mut self, factor: T) -> Self {
        self.0.iter_mut().for_each(|c| *c = *c * factor);
        self.normalize()
    }
}
