use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Solving `0 = 0`, every real number is a root
    #[error("the equation \"0 = 0\" has infinitely many roots")]
    InfiniteRoots,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("coefficient index {index} is out of range for a polynomial of degree {degree}")]
    IndexOutOfRange { index: usize, degree: usize },

    /// Bisection was invoked with an inverted bracket. This is a bug in the
    /// root isolator, please report it.
    #[error("left bound {left} can't be larger than right bound {right}")]
    InvalidBound { left: f64, right: f64 },

    /// Use this for when the user-provided maxiter is reached
    #[error("did not converge within {iterations} iterations")]
    NoConverge { iterations: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_bound<T: num::ToPrimitive>(left: T, right: T) -> Self {
        Self::InvalidBound {
            left: left.to_f64().unwrap_or(f64::NAN),
            right: right.to_f64().unwrap_or(f64::NAN),
        }
    }
}
