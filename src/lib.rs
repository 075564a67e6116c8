//! Find all real roots of real univariate polynomials.
//!
//! Roots are isolated by recursing on derivatives: between two consecutive
//! roots of `p'` the polynomial `p` is monotonic, so each such interval holds
//! at most one root, which is then pinned down by bisection.
//!
//! ```
//! use poly_real_roots::{poly, Poly64};
//!
//! // x^2 + x - 6
//! let p: Poly64 = poly![-6.0, 1.0, 1.0];
//! assert_eq!(p.real_roots().unwrap(), vec![-3.0, 2.0]);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// A more convenient way to write `Poly::new(&[...])`.
///
/// Coefficients are listed from the constant term upwards.
///
/// # Examples
///
/// ```
/// use poly_real_roots::{Poly, poly};
///
/// let p1: Poly<f32> = poly![1.0, 2.0, 3.0];
/// let p2 = Poly::new(&[1.0, 2.0, 3.0]);
///
/// assert_eq!(p1, p2);
/// ```
///
/// The macro also allows for an empty list, which makes the zero polynomial.
///
/// ```
/// use poly_real_roots::{Poly64, poly};
///
/// let p: Poly64 = poly![];
/// assert_eq!(p, Poly64::zero());
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::Poly::zero()
    }};
    ($($c:expr),+ $(,)?) => {{
        $crate::Poly::new(&[$($c),+])
    }};
}

pub use num;

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::RealScalar;

mod poly;
pub use poly::{roots, Poly};

mod util;
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
