use num::Zero;

use crate::RealScalar;

/// Full discrete convolution, the output has `input.len() + kernel.len() - 1`
/// elements.
pub(crate) fn convolve_1d<T: RealScalar>(input: &[T], kernel: &[T]) -> Vec<T> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    debug_assert!(input_len > 0 && kernel_len > 0);
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![T::zero(); output_len];

    for (i, a) in input.iter().enumerate() {
        for (j, b) in kernel.iter().enumerate() {
            output[i + j] = output[i + j] + *a * *b;
        }
    }
    output
}

#[cfg(test)]
mod test {
    use super::convolve_1d;

    #[test]
    fn convolve() {
        assert_eq!(convolve_1d(&[1.0, 2.0], &[3.0]), vec![3.0, 6.0]);
        assert_eq!(
            convolve_1d(&[1.0, 1.0], &[-1.0, 1.0]),
            vec![-1.0, 0.0, 1.0]
        );
    }
}
