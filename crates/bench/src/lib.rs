use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `0..len` in ascending order, the worst case for an unbalanced tree.
pub fn sequential_keys(len: usize) -> Vec<u64> {
    (0..len as u64).collect()
}

/// `0..len` in random order.
pub fn shuffled_keys<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut keys = sequential_keys(len);
    keys.shuffle(rng);
    keys
}

/// `count` keys drawn uniformly from `0..2 * len`, so about half of them miss
/// a tree holding `0..len`.
pub fn probe_keys<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize) -> Vec<u64> {
    let upper = (2 * len as u64).max(1);
    (0..count).map(|_| rng.random_range(0..upper)).collect()
}
