// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs)]

mod macros;

pub mod aggregate;
pub mod scalar;
pub mod simd;

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    /// Checks that every kernel agrees with the scalar baseline on this
    /// input, and that each of them is idempotent.
    fn assert_kernels_agree(values: &[i32]) {
        let expected = crate::scalar::sum(values);
        assert_eq!(crate::scalar::sum(values), expected);
        assert_eq!(crate::simd::sum(values), expected);
        assert_eq!(crate::simd::sum(values), expected);
        assert_eq!(crate::aggregate::sum(values), expected);
        assert_eq!(crate::aggregate::sum(values), expected);
    }

    macro_rules! equivalence_tests {
        ( $( $case:ident => $input:expr, )* ) => {
            $(
                #[test]
                fn $case() {
                    let input = $input;
                    assert_kernels_agree(&input);
                }
            )*
        };
    }

    equivalence_tests!(
        test_empty_input => [0i32; 0],
        test_single_element => [123i32],
        test_all_negative => vec![-7i32; 1_000],
        test_extremes => [i32::MAX, i32::MIN, 1, -1, i32::MAX],
        test_sequential_10k => (1..=10_000).collect::<Vec<i32>>(),
    );

    #[test]
    fn test_benchmark_workload() {
        let input = (1..=10_000).collect::<Vec<i32>>();
        assert_eq!(crate::scalar::sum(&input), 50_005_000);
        assert_eq!(crate::simd::sum(&input), 50_005_000);
        assert_eq!(crate::aggregate::sum(&input), 50_005_000);
    }

    #[test]
    fn test_overflow_wraps_in_every_kernel() {
        // Two elements at two thirds of `i32::MAX` overflow the 32-bit range;
        // all kernels must produce the same wrapped (negative) total rather
        // than widening the accumulator.
        let x = (i32::MAX / 3) * 2;
        let input = [x, x];
        let expected = x.wrapping_add(x);
        assert!(expected < 0);
        assert_eq!(crate::scalar::sum(&input), expected);
        assert_eq!(crate::simd::sum(&input), expected);
        assert_eq!(crate::aggregate::sum(&input), expected);
    }

    #[test]
    fn test_lane_width_boundaries() {
        // Lengths around the detected lane width exercise the pure-remainder,
        // pure-vector and mixed paths of the vectorized kernels.
        let width = crate::simd::lane_width();
        for len in [width - 1, width, width + 1, 4 * width, 4 * width + 3] {
            let input = (0..len as i32).map(|i| i * 17 - 1_000).collect::<Vec<i32>>();
            assert_kernels_agree(&input);
        }
    }

    #[test]
    fn test_random_inputs() {
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        for len in [2, 31, 32, 33, 1_000, 10_000] {
            let input = (0..len).map(|_| rng.random()).collect::<Vec<i32>>();
            assert_kernels_agree(&input);
        }
    }
}
