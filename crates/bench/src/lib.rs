use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_2026;

const SMALL_INPUT_LIMIT: usize = 256;
const MEDIUM_INPUT_LIMIT: usize = 1024;

/// Criterion runtime configuration scaled to the input length. Worst-case
/// runs are quadratic, so the windows are generous compared to what
/// n log n sorts of the same length would need.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, input_len: usize) {
    let (samples, warm_up_ms, measure_ms) = if input_len <= SMALL_INPUT_LIMIT {
        (15, 100, 200)
    } else if input_len <= MEDIUM_INPUT_LIMIT {
        (15, 500, 1000)
    } else {
        (10, 800, 1500)
    };

    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
