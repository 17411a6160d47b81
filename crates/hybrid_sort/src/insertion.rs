use std::mem::ManuallyDrop;
use std::ptr;

// When dropped, copies from `src` into `dest`. Keeps every element of the
// slice alive exactly once if the comparator panics mid-shift.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` and `dest` never overlap and stay valid for the
        // guard's lifetime, see `insert_at`.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        // SAFETY: `1 <= i < len`.
        unsafe {
            insert_at(v, i, is_less);
        }
    }
}

/// Inserts `v[i]` into the sorted prefix `v[..i]`, shifting the
/// strictly-greater elements one slot to the right.
///
/// SAFETY: requires `1 <= i < v.len()`.
unsafe fn insert_at<T, F>(v: &mut [T], i: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(i >= 1 && i < v.len());

    let arr_ptr = v.as_mut_ptr();

    unsafe {
        let i_ptr = arr_ptr.add(i);
        if !is_less(&*i_ptr, &*i_ptr.sub(1)) {
            return;
        }

        // The held value lives in `tmp` while its slot is a hole; the guard
        // refills the hole with it no matter how the shift loop exits.
        let tmp = ManuallyDrop::new(ptr::read(i_ptr));
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(1),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

        for j in (0..i - 1).rev() {
            let j_ptr = arr_ptr.add(j);
            if !is_less(&*tmp, &*j_ptr) {
                break;
            }
            ptr::copy_nonoverlapping(j_ptr, hole.dest, 1);
            hole.dest = j_ptr;
        }
        // `hole` drops here and writes `tmp` into the final gap.
    }
}
