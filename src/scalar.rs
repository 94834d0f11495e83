// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scalar summation, the correctness baseline that every other kernel must
//! match bit-for-bit.

/// Sums the given slice by sequential accumulation in index order.
///
/// Arithmetic wraps around on overflow, matching two's-complement 32-bit
/// semantics. An empty slice sums to zero.
///
/// ```rust
/// assert_eq!(vecsum::scalar::sum(&[1, 2, 3]), 6);
/// assert_eq!(vecsum::scalar::sum(&[]), 0);
/// ```
#[inline]
pub fn sum(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, &x| acc.wrapping_add(x))
}
