use crate::insertion::insertion_sort;

pub(crate) fn quicksort_hybrid<T, F>(v: &mut [T], is_less: &mut F, threshold: usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    // A one-element range is already sorted; with threshold 0 the driver
    // loop could never shrink it below the threshold.
    let threshold = threshold.max(1);
    let depth_limit = max_recursion_depth(v.len());
    sort_loop(v, is_less, threshold, 0, depth_limit);
}

// Recursing only into the smaller partition side keeps the depth below
// ~log2(len) regardless of how unbalanced the pivots turn out; the larger
// side is handled by narrowing `v` and continuing the loop.
fn sort_loop<T, F>(
    mut v: &mut [T],
    is_less: &mut F,
    threshold: usize,
    depth: u32,
    depth_limit: u32,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(depth <= depth_limit);

    while v.len() > threshold {
        let pivot = v[median_of_three(v, is_less)].clone();
        let split = partition_hoare(v, &pivot, is_less);

        let (left, right) = v.split_at_mut(split + 1);
        if left.len() < right.len() {
            if !left.is_empty() {
                sort_loop(left, is_less, threshold, depth + 1, depth_limit);
            }
            v = right;
        } else {
            if !right.is_empty() {
                sort_loop(right, is_less, threshold, depth + 1, depth_limit);
            }
            v = left;
        }
    }

    insertion_sort(v, is_less);
}

#[inline]
fn max_recursion_depth(len: usize) -> u32 {
    usize::BITS - len.leading_zeros() + 1
}

// Index of the median of `v[0]`, `v[(len - 1) / 2]` and `v[len - 1]`.
fn median_of_three<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let (a, b, c) = (0, (v.len() - 1) / 2, v.len() - 1);
    if is_less(&v[a], &v[b]) {
        if is_less(&v[b], &v[c]) {
            b
        } else if is_less(&v[a], &v[c]) {
            c
        } else {
            a
        }
    } else if is_less(&v[a], &v[c]) {
        a
    } else if is_less(&v[b], &v[c]) {
        c
    } else {
        b
    }
}

// Hoare two-cursor partition around a pivot value copied out of the slice.
// Returns the last index `j` of the left side: elements in `..=j` are <=
// pivot, elements in `j + 1..` are >= pivot, multiset unchanged. The cursor
// scans stay in bounds because the pivot value itself is present in `v`.
fn partition_hoare<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let mut i = 0;
    let mut j = v.len() - 1;
    loop {
        while is_less(&v[i], pivot) {
            i += 1;
        }

        while is_less(pivot, &v[j]) {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}
