//! Macros for reducing doc comment boilerplate.

/// Default explanation for [`crate::Error::InfiniteRoots`] errors.
macro_rules! errors_infinite_roots {
    () => {
        r"- `InfiniteRoots`: the polynomial is the zero polynomial, so every real number is a root.\n"
    };
}
pub(crate) use errors_infinite_roots;

/// Default explanation for [`crate::Error::NoConverge`] errors.
macro_rules! errors_no_converge {
    () => {
        r"- `NoConverge`: a Newton search exceeded the iteration ceiling set in [`crate::roots::Config::max_iter`]. Never returned when no ceiling is set.\n"
    };
}
pub(crate) use errors_no_converge;
