use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

/// A sort produced output that is not in non-decreasing order.
///
/// Wrong output invalidates every later measurement, so callers stop the
/// sweep at the first occurrence instead of continuing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsortedOutput {
    pub algorithm: &'static str,
    pub len: usize,
}

impl fmt::Display for UnsortedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} produced unsorted output for n={}",
            self.algorithm, self.len
        )
    }
}

impl Error for UnsortedOutput {}

/// Times `sort` over `repeats` fresh copies of `base` and returns the total
/// elapsed wall time. The sortedness postcondition is checked after every
/// run.
pub fn time_sort<F>(
    base: &[u64],
    repeats: usize,
    algorithm: &'static str,
    mut sort: F,
) -> Result<Duration, UnsortedOutput>
where
    F: FnMut(&mut [u64]),
{
    let mut total = Duration::ZERO;
    for _ in 0..repeats {
        let mut data = base.to_vec();
        let start = Instant::now();
        sort(&mut data);
        total += start.elapsed();

        if !data.is_sorted() {
            return Err(UnsortedOutput {
                algorithm,
                len: base.len(),
            });
        }
    }
    Ok(total)
}
