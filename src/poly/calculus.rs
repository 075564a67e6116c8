use crate::{util::casting::usize_to_scalar, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Derivative
    ///
    /// The derivative of a constant is the zero polynomial.
    ///
    /// ```
    /// use poly_real_roots::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].diff(), poly![2.0, 6.0]);
    /// ```
    #[must_use]
    pub fn diff(&self) -> Self {
        debug_assert!(self.is_normalized());

        // derivative of constant is zero
        if self.degree_raw() == 0 {
            return Self::zero();
        }

        let coeffs: Vec<_> = self
            .0
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(n, c)| *c * usize_to_scalar::<T>(n))
            .collect();
        Self(coeffs).normalize()
    }
}
