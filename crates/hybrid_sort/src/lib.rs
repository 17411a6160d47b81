mod insertion;
mod quicksort;

use std::cmp::Ordering;

/// Range lengths at or below this are handed to insertion sort by the
/// hybrid quicksort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 16;

/// Sorts `v` in place with a plain shift-insert insertion sort: O(n) on
/// already-sorted input, O(n^2) on reverse-sorted input.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion::insertion_sort(v, &mut |a: &T, b: &T| a < b);
}

pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion::insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place with a median-of-three quicksort that falls back to
/// insertion sort below [`DEFAULT_INSERTION_THRESHOLD`].
///
/// - Hoare partition against a pivot value cloned out of the slice (hence
///   the `Clone` bound); elements only move through swaps.
/// - The smaller side of every partition is sorted recursively, the larger
///   one by narrowing the active range, so stack depth stays logarithmic
///   even when every partition is maximally unbalanced.
/// - The comparator must be a strict weak ordering; anything else yields an
///   unspecified permutation or a panic, never undefined behavior.
/// - Not stable: equal elements may be reordered.
pub fn quicksort_hybrid<T: Ord + Clone>(v: &mut [T]) {
    quicksort_hybrid_with_threshold(v, DEFAULT_INSERTION_THRESHOLD);
}

pub fn quicksort_hybrid_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_hybrid_by_with_threshold(v, compare, DEFAULT_INSERTION_THRESHOLD);
}

pub fn quicksort_hybrid_with_threshold<T: Ord + Clone>(v: &mut [T], threshold: usize) {
    quicksort::quicksort_hybrid(v, &mut |a: &T, b: &T| a < b, threshold);
}

pub fn quicksort_hybrid_by_with_threshold<T, F>(v: &mut [T], mut compare: F, threshold: usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort::quicksort_hybrid(v, &mut |a, b| compare(a, b) == Ordering::Less, threshold);
}
