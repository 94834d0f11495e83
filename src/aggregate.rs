// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Summation through [`pulp`], a runtime-dispatch SIMD library.
//!
//! This kernel delegates vectorization entirely to an external helper:
//! [`pulp::Arch::dispatch()`] probes the CPU and runs the accumulation loop
//! compiled for the best instruction set it found. Its only contract here is
//! output equivalence with [`scalar::sum()`](crate::scalar::sum).

use pulp::Arch;

/// Sums the given slice via `pulp`'s runtime-dispatched vectorization.
///
/// The accumulation wraps on overflow, like every other kernel. Wrapping
/// 32-bit addition is associative, so the dispatched loop is free to
/// reassociate it into vector lanes without changing the result.
pub fn sum(values: &[i32]) -> i32 {
    let arch = Arch::new();
    arch.dispatch(|| values.iter().fold(0i32, |acc, &x| acc.wrapping_add(x)))
}
