// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI tool to run a summation kernel on a configurable input.

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::hint::black_box;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let input: Vec<i32> = match cli.seed {
        Some(seed) => {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            (0..cli.input_size).map(|_| rng.random()).collect()
        }
        None => (1..=cli.input_size as i32).collect(),
    };
    let input_slice = black_box(input.as_slice());

    let sum = match cli.kernel {
        Kernel::Scalar => vecsum::scalar::sum(input_slice),
        Kernel::Simd => {
            println!(
                "backend = {:?} ({} lanes of i32)",
                vecsum::simd::backend(),
                vecsum::simd::lane_width()
            );
            vecsum::simd::sum(input_slice)
        }
        Kernel::Pulp => vecsum::aggregate::sum(input_slice),
    };
    println!("sum = {sum}");
}

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Summation kernel to run.
    #[arg(long, value_enum)]
    kernel: Kernel,

    /// Number of elements to sum.
    #[arg(long, default_value_t = 10_000)]
    input_size: usize,

    /// When set, fill the input with seeded random values instead of the
    /// sequential integers starting at 1.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kernel {
    /// Scalar accumulation in index order.
    Scalar,
    /// Explicit vector accumulation on the best detected backend.
    Simd,
    /// Runtime-dispatched vectorization via the pulp library.
    Pulp,
}
