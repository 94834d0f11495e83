// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! NEON backend: 128-bit vectors, four 32-bit lanes per step.

use std::arch::aarch64::*;

/// Number of 32-bit lanes in a 128-bit vector.
pub(super) const LANES: usize = 4;

/// Sums the slice with 128-bit vector accumulation.
///
/// `vaddq_s32` and the `vaddvq_s32` lane reduction both wrap, so the result
/// matches the scalar baseline on overflow.
///
/// # Safety
///
/// The caller must ensure that the CPU supports NEON (always true on
/// aarch64).
pub(super) unsafe fn sum(values: &[i32]) -> i32 {
    let len = values.len();
    let mut i = 0;

    let mut acc = vdupq_n_s32(0);
    while i + LANES <= len {
        let v = vld1q_s32(values.as_ptr().add(i));
        acc = vaddq_s32(acc, v);
        i += LANES;
    }

    // Horizontal add across the four lanes.
    let mut sum = vaddvq_s32(acc);

    // Trailing elements that don't fill a full vector.
    while i < len {
        sum = sum.wrapping_add(values[i]);
        i += 1;
    }
    sum
}
