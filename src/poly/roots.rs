//! Real root isolation.
//!
//! The roots of `p'` split the real line into intervals on which `p` is
//! monotonic, so each interval holds at most one root of `p`. The roots of
//! `p'` are found the same way, recursing down to a linear polynomial.
//!
//! The outermost intervals are unbounded. Their roots are bracketed by
//! stepping outwards with Newton's method, then every bracket is refined by
//! bisection until the midpoint stops changing.

use itertools::Itertools;
use num::Zero;

use crate::{
    util::doc_macros::{errors_infinite_roots, errors_no_converge},
    Error, Poly, RealScalar, Result,
};

mod bisection;
mod search;

/// Tuning knobs for [`Poly::real_roots_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of Newton steps in each search for a bracket. `None`
    /// means no limit.
    pub max_iter: Option<usize>,
}

impl Config {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_iter: None }
    }

    #[must_use]
    pub const fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }
}

impl<T: RealScalar> Poly<T> {
    /// All distinct real roots, in ascending order.
    ///
    /// Roots of higher multiplicity are reported once.
    ///
    /// # Errors
    #[doc = errors_infinite_roots!()]
    ///
    /// # Examples
    /// ```
    /// use poly_real_roots::{poly, Poly64};
    ///
    /// assert_eq!(poly![-6.0, 2.0].real_roots().unwrap(), vec![3.0]);
    /// assert!(poly![1.0, 0.0, 1.0].real_roots().unwrap().is_empty());
    /// assert!(Poly64::zero().real_roots().is_err());
    /// ```
    pub fn real_roots(&self) -> Result<Vec<T>> {
        self.real_roots_with(&Config::default())
    }

    /// Same as [`Poly::real_roots`], with explicit configuration.
    ///
    /// # Errors
    #[doc = errors_infinite_roots!()]
    #[doc = errors_no_converge!()]
    /// - `Other`: a Newton step divided by a vanishing derivative or jumped
    ///   out of the finite range (e.g. `p(0) / p'(0)` overflows), or the
    ///   polynomial is not finite anywhere near a search point. Only happens
    ///   with non-finite or absurdly scaled coefficients.
    pub fn real_roots_with(&self, config: &Config) -> Result<Vec<T>> {
        debug_assert!(self.is_normalized());
        log::trace!("starting with arguments: {{poly: \"{self}\", config: \"{config:?}\"}}");

        let roots = self.isolate_roots(config)?;

        // post-condition: strictly ascending
        debug_assert!(roots.iter().tuple_windows().all(|(a, b)| a < b));
        log::debug!("found {} real roots: {roots:?}", roots.len());
        Ok(roots)
    }

    fn isolate_roots(&self, config: &Config) -> Result<Vec<T>> {
        match self.degree_raw() {
            0 => {
                if self.0[0].is_zero() {
                    return Err(Error::InfiniteRoots);
                }
                Ok(vec![])
            }
            1 => Ok(vec![-self.0[0] / self.0[1]]),
            _ => {
                // never the zero polynomial, so never infinite roots
                let critical = self.diff().isolate_roots(config)?;
                log::trace!("critical points: {critical:?}");

                let (Some(&first), Some(&last)) = (critical.first(), critical.last()) else {
                    // strictly monotonic everywhere
                    return Ok(search::unbounded(self, config)?.into_iter().collect());
                };

                let mut roots = Vec::with_capacity(critical.len() + 1);
                push_ascending(&mut roots, search::leftward(self, first, config)?);
                for (&left, &right) in critical.iter().tuple_windows() {
                    push_ascending(&mut roots, bisection::bisect(self, left, right)?);
                }
                push_ascending(&mut roots, search::rightward(self, last, config)?);
                Ok(roots)
            }
        }
    }
}

/// Adjacent intervals share their critical point, a root sitting exactly on
/// one is found from both sides and must only be kept once.
fn push_ascending<T: RealScalar>(roots: &mut Vec<T>, root: Option<T>) {
    let Some(root) = root else {
        return;
    };
    if roots.last().is_none_or(|last| root > *last) {
        roots.push(root);
    }
}
