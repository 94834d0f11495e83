// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Explicitly vectorized summation, dispatched at runtime over the CPU's
//! SIMD capabilities.
//!
//! The backend is probed once per process and cached: AVX2 on x86/x86_64
//! when available, NEON on aarch64, and a scalar fallback everywhere else.
//! Each backend accumulates full vector-width chunks with per-lane wrapping
//! adds, sums the trailing elements scalar-wise, and reduces the accumulator
//! by a wrapping horizontal lane sum, so the result is bit-identical to
//! [`scalar::sum()`](crate::scalar::sum) for every input.

use crate::macros::log_debug;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod avx2;
#[cfg(target_arch = "aarch64")]
mod neon;

/// The SIMD backend selected for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Plain scalar accumulation, one element per step.
    Scalar,
    /// 256-bit AVX2 vectors, eight 32-bit lanes per step.
    Avx2,
    /// 128-bit NEON vectors, four 32-bit lanes per step.
    Neon,
}

const BACKEND_UNPROBED: u8 = 0;
const BACKEND_SCALAR: u8 = 1;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const BACKEND_AVX2: u8 = 2;
#[cfg(target_arch = "aarch64")]
const BACKEND_NEON: u8 = 3;

/// Cached result of the CPU feature probe.
static BACKEND: AtomicU8 = AtomicU8::new(BACKEND_UNPROBED);

fn probe_backend() -> u8 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx2") {
            return BACKEND_AVX2;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // NEON is mandatory on aarch64.
        return BACKEND_NEON;
    }

    #[allow(unreachable_code)]
    BACKEND_SCALAR
}

fn backend_id() -> u8 {
    let cached = BACKEND.load(Ordering::Relaxed);
    if cached != BACKEND_UNPROBED {
        return cached;
    }

    let probed = probe_backend();
    BACKEND.store(probed, Ordering::Relaxed);
    log_debug!(
        "probed SIMD backend: {:?} ({} lanes of i32)",
        decode_backend(probed),
        lane_width_of(decode_backend(probed))
    );
    probed
}

fn decode_backend(id: u8) -> Backend {
    match id {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        BACKEND_AVX2 => Backend::Avx2,
        #[cfg(target_arch = "aarch64")]
        BACKEND_NEON => Backend::Neon,
        _ => Backend::Scalar,
    }
}

/// Returns the SIMD backend selected for this process.
///
/// The CPU is probed on the first call and the result is cached, so the
/// backend never changes for the lifetime of the process.
pub fn backend() -> Backend {
    decode_backend(backend_id())
}

fn lane_width_of(backend: Backend) -> usize {
    match backend {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        Backend::Avx2 => avx2::LANES,
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => neon::LANES,
        _ => 1,
    }
}

/// Returns the number of 32-bit lanes that [`sum()`] processes per step on
/// this hardware.
///
/// This is a runtime-queried property of the executing CPU, not a
/// compile-time constant: 8 with AVX2, 4 with NEON, 1 on the scalar
/// fallback. Input lengths below this width take the pure-remainder path of
/// [`sum()`]; exact multiples of it take the pure-vector path.
pub fn lane_width() -> usize {
    lane_width_of(backend())
}

/// Sums the given slice with explicit vector accumulation.
///
/// Full chunks of [`lane_width()`] elements are added element-wise into a
/// vector accumulator; trailing elements are accumulated scalar-wise; the
/// accumulator is then reduced by a horizontal lane sum and combined with
/// the remainder. All additions wrap on overflow, so the result equals
/// [`scalar::sum()`](crate::scalar::sum) for every input length and content.
pub fn sum(values: &[i32]) -> i32 {
    match backend() {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        // SAFETY: the probe confirmed AVX2 support on this CPU.
        Backend::Avx2 => unsafe { avx2::sum(values) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is always available on aarch64.
        Backend::Neon => unsafe { neon::sum(values) },
        _ => crate::scalar::sum(values),
    }
}
