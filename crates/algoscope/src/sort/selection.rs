//! Selection sort.

use algoscope_core::trace::Frame;

use super::Recorder;

/// Scans each suffix for its minimum, counting one operation per comparison,
/// and records a frame only when the minimum has to move.
pub(super) fn trace(values: &[i64]) -> (Vec<Frame>, u64) {
    let mut recorder = Recorder::new(values);
    let len = recorder.values.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..len {
            recorder.count();
            if recorder.values[j] < recorder.values[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            recorder.swap(i, min_idx);
        }
    }

    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_trace() {
        let (frames, operations) = trace(&[5, 3, 8, 1]);

        assert_eq!(
            frames,
            vec![vec![5, 3, 8, 1], vec![1, 3, 8, 5], vec![1, 3, 5, 8]]
        );
        assert_eq!(operations, 6);
    }

    #[test]
    fn test_duplicates_keep_first_minimum() {
        let (frames, operations) = trace(&[2, 1, 1]);

        assert_eq!(frames, vec![vec![2, 1, 1], vec![1, 2, 1], vec![1, 1, 2]]);
        assert_eq!(operations, 3);
    }
}
