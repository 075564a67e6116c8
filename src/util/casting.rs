use num::cast;

use crate::RealScalar;

pub(crate) fn usize_to_i32(x: usize) -> i32 {
    x.try_into().unwrap_or(i32::MAX)
}

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_scalar<T: RealScalar>(x: usize) -> T {
    cast(x).unwrap_or_else(T::infinity)
}
