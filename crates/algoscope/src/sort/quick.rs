//! Quicksort with a Hoare partition.
//!
//! The pivot is the element at the midpoint of the current subrange, so the
//! same input always produces the same frames.

use algoscope_core::trace::Frame;

use super::Recorder;

/// Sorts a copy of `values`, recording a frame on every swap and counting
/// one operation for every pointer advance.
pub(super) fn trace(values: &[i64]) -> (Vec<Frame>, u64) {
    let mut recorder = Recorder::new(values);
    let len = recorder.values.len() as isize;
    quick_sort(&mut recorder, 0, len - 1);
    recorder.finish()
}

fn quick_sort(recorder: &mut Recorder, l: isize, r: isize) {
    if l >= r {
        return;
    }
    let (i, j) = partition(recorder, l, r);
    if l < j {
        quick_sort(recorder, l, j);
    }
    if i < r {
        quick_sort(recorder, i, r);
    }
}

/// Partitions `l..=r` and returns the final positions of the two scan
/// pointers. Everything in `l..=j` is at most the pivot and everything in
/// `i..=r` is at least the pivot.
fn partition(recorder: &mut Recorder, l: isize, r: isize) -> (isize, isize) {
    let pivot = recorder.values[((l + r) / 2) as usize];
    let (mut i, mut j) = (l, r);

    while i <= j {
        while recorder.values[i as usize] < pivot {
            i += 1;
            recorder.count();
        }
        while recorder.values[j as usize] > pivot {
            j -= 1;
            recorder.count();
        }
        if i <= j {
            recorder.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    (i, j)
}
