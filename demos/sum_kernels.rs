// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Simple program that sums the default workload with every kernel.

use std::hint::black_box;

fn main() {
    let input = (1..=10_000).collect::<Vec<i32>>();
    let input_slice = black_box(input.as_slice());

    println!(
        "simd backend = {:?} ({} lanes of i32)",
        vecsum::simd::backend(),
        vecsum::simd::lane_width()
    );
    println!("scalar sum    = {}", vecsum::scalar::sum(input_slice));
    println!("simd sum      = {}", vecsum::simd::sum(input_slice));
    println!("aggregate sum = {}", vecsum::aggregate::sum(input_slice));
}
