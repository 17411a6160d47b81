/// Linearly spaced sample sizes from `min_n` to `max_n`, rounded to the
/// nearest integer and clamped to at least 1.
///
/// Degenerate requests (`count <= 1`, or `min_n >= max_n`) collapse to a
/// single sample at `min_n`.
pub fn sample_sizes(min_n: usize, max_n: usize, count: usize) -> Vec<usize> {
    if count <= 1 || min_n >= max_n {
        return vec![min_n];
    }

    let step = (max_n - min_n) as f64 / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let value = (min_n as f64 + step * i as f64).round() as usize;
            value.max(1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_requests_collapse_to_min() {
        assert_eq!(sample_sizes(4, 50, 0), vec![4]);
        assert_eq!(sample_sizes(4, 50, 1), vec![4]);
        assert_eq!(sample_sizes(50, 4, 10), vec![50]);
        assert_eq!(sample_sizes(7, 7, 10), vec![7]);
    }

    #[test]
    fn spans_endpoints_with_exact_count() {
        let sizes = sample_sizes(4, 50, 47);
        assert_eq!(sizes.len(), 47);
        assert_eq!(sizes, (4..=50).collect::<Vec<_>>());
    }

    #[test]
    fn rounded_sizes_are_non_decreasing() {
        for &(min_n, max_n, count) in &[(1_usize, 1_000, 7), (2, 9, 100), (10, 11, 5)] {
            let sizes = sample_sizes(min_n, max_n, count);
            assert_eq!(sizes.len(), count);
            assert_eq!(sizes.first(), Some(&min_n));
            assert_eq!(sizes.last(), Some(&max_n));
            assert!(sizes.windows(2).all(|w| w[0] <= w[1]), "{sizes:?}");
        }
    }

    #[test]
    fn sizes_are_clamped_to_at_least_one() {
        assert!(sample_sizes(0, 8, 9).iter().all(|&n| n >= 1));
    }
}
