use std::ops::Index;

use crate::{Error, Poly, RealScalar, Result};

impl<T: RealScalar> Poly<T> {
    /// The coefficient of the term `x^index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        debug_assert!(self.is_normalized());
        self.0.get(index).copied()
    }

    /// The coefficient of the term `x^index`.
    ///
    /// # Errors
    /// - `IndexOutOfRange`: `index` is larger than the degree
    ///
    /// ```
    /// use poly_real_roots::{poly, Error};
    ///
    /// let p = poly![1.0, 2.0];
    /// assert_eq!(p.coefficient(1).unwrap(), 2.0);
    /// assert!(matches!(p.coefficient(2), Err(Error::IndexOutOfRange { .. })));
    /// ```
    pub fn coefficient(&self, index: usize) -> Result<T> {
        self.get(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            degree: self.degree(),
        })
    }
}

impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
