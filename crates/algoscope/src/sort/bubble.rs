//! Bubble sort as a step-wise event source.

use std::{
    iter::FusedIterator,
    time::{Duration, Instant},
};

use log::debug;

use algoscope_core::{
    cancel::CancelToken,
    trace::{Frame, SortEvent},
};

/// Bubble sort that yields one [`SortEvent`] at a time.
///
/// Each adjacent comparison is one step. The [`CancelToken`] is checked
/// before every step; once it is set the iterator ends and [`values`]
/// keeps the partially sorted array. A swap is applied to the array when its
/// comparison is made and is reported by the [`SortEvent::Swap`] that
/// follows the [`SortEvent::Compare`].
///
/// [`values`]: BubbleSort::values
///
/// # Examples
///
/// ```
/// use algoscope::sort::BubbleSort;
/// use algoscope_core::{cancel::CancelToken, trace::SortEvent};
///
/// let mut sorter = BubbleSort::new(&[3, 1, 2], CancelToken::new());
/// let swaps = sorter
///     .by_ref()
///     .filter(|event| matches!(event, SortEvent::Swap { .. }))
///     .count();
///
/// assert_eq!(swaps, 2);
/// assert_eq!(sorter.values(), &[1, 2, 3]);
/// assert!(sorter.is_complete());
/// ```
#[derive(Debug)]
pub struct BubbleSort {
    values: Vec<i64>,
    pass: usize,
    cursor: usize,
    operations: u64,
    started: Instant,
    cancel: CancelToken,
    pending: Option<SortEvent>,
    cancelled: bool,
    complete: bool,
}

impl BubbleSort {
    /// Creates a sorter over a private copy of `values`.
    pub fn new(values: &[i64], cancel: CancelToken) -> Self {
        Self {
            values: values.to_vec(),
            pass: 0,
            cursor: 0,
            operations: 0,
            started: Instant::now(),
            cancel,
            pending: None,
            cancelled: false,
            complete: false,
        }
    }

    /// Current state of the array.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Comparisons made so far.
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Time since the sorter was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Returns `true` if the run stopped because of cancellation.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Returns `true` once every pass has finished.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Iterator for BubbleSort {
    type Item = SortEvent;

    fn next(&mut self) -> Option<SortEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        if self.complete || self.cancelled {
            return None;
        }
        if self.cancel.is_cancelled() {
            self.cancelled = true;
            debug!(operations = self.operations, pass = self.pass; "Bubble sort cancelled");
            return None;
        }

        let len = self.values.len();
        if self.pass >= len {
            self.complete = true;
            return None;
        }

        let pass_end = len - self.pass - 1;
        if self.cursor >= pass_end {
            self.pass += 1;
            self.cursor = 0;
            return Some(SortEvent::Settled { index: pass_end });
        }

        let (left, right) = (self.cursor, self.cursor + 1);
        self.cursor += 1;
        self.operations += 1;
        if self.values[left] > self.values[right] {
            self.values.swap(left, right);
            self.pending = Some(SortEvent::Swap { left, right });
        }

        Some(SortEvent::Compare {
            left,
            right,
            operations: self.operations,
            elapsed: self.started.elapsed(),
        })
    }
}

impl FusedIterator for BubbleSort {}

/// Runs a bubble sort to completion, recording a frame after every swap.
pub(super) fn trace(values: &[i64]) -> (Vec<Frame>, u64) {
    let mut frames = vec![values.to_vec()];
    let mut sorter = BubbleSort::new(values, CancelToken::new());
    while let Some(event) = sorter.next() {
        if let SortEvent::Swap { .. } = event {
            frames.push(sorter.values().to_vec());
        }
    }
    (frames, sorter.operations())
}
