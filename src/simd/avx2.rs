// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! AVX2 backend: 256-bit vectors, eight 32-bit lanes per step.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Number of 32-bit lanes in a 256-bit vector.
pub(super) const LANES: usize = 8;

/// Sums the slice with 256-bit vector accumulation.
///
/// `_mm256_add_epi32` wraps per lane and the remainder loop wraps too, so
/// the result matches the scalar baseline on overflow.
///
/// # Safety
///
/// The caller must ensure that the CPU supports AVX2.
#[target_feature(enable = "avx2")]
pub(super) unsafe fn sum(values: &[i32]) -> i32 {
    let len = values.len();
    let mut i = 0;

    let mut acc = _mm256_setzero_si256();
    while i + LANES <= len {
        let v = _mm256_loadu_si256(values.as_ptr().add(i) as *const __m256i);
        acc = _mm256_add_epi32(acc, v);
        i += LANES;
    }

    // Horizontal reduction of the accumulator, the dot product with an
    // all-ones vector. Staying in 32-bit lanes preserves wraparound.
    let mut lanes = [0i32; LANES];
    _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, acc);
    let mut sum = lanes.iter().fold(0i32, |s, &x| s.wrapping_add(x));

    // Trailing elements that don't fill a full vector.
    while i < len {
        sum = sum.wrapping_add(values[i]);
        i += 1;
    }
    sum
}
