//! Sorting engine.
//!
//! [`sort_trace`] runs one of the supported algorithms on a private copy of
//! the input and records a [`Frame`] after every state-changing step. The
//! input itself is never modified.
//!
//! Bubble sort is also available as a step-wise [`BubbleSort`] iterator for
//! renderers that animate individual comparisons and need to stop midway.

mod bubble;
mod quick;
mod selection;

pub use bubble::BubbleSort;

use std::{fmt, str::FromStr, time::Instant};

use log::{debug, trace};
use serde::Deserialize;

use algoscope_core::trace::{Frame, SortTrace};

/// Available sorting algorithms.
///
/// The names match external configuration strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// Selection sort, one frame per swap (default)
    #[default]
    Selection,
    /// Quicksort with a Hoare partition around the midpoint element
    Quick,
    /// Bubble sort, one frame per swap
    Bubble,
}

impl SortAlgorithm {
    /// Returns the asymptotic comparison count, for display next to a trace.
    pub fn complexity(self) -> &'static str {
        match self {
            SortAlgorithm::Selection | SortAlgorithm::Bubble => "O(n²)",
            SortAlgorithm::Quick => "O(n log n)",
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection" => Ok(Self::Selection),
            "quick" => Ok(Self::Quick),
            "bubble" => Ok(Self::Bubble),
            _ => Err("Unsupported sort algorithm"),
        }
    }
}

impl From<SortAlgorithm> for &'static str {
    fn from(val: SortAlgorithm) -> Self {
        match val {
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Bubble => "bubble",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Sorts a copy of `values` and returns every intermediate frame.
///
/// The first frame is always the input as given. Empty and single-element
/// inputs produce exactly one frame and zero operations.
///
/// # Examples
///
/// ```
/// use algoscope::sort::{SortAlgorithm, sort_trace};
///
/// let trace = sort_trace(&[5, 3, 8, 1], SortAlgorithm::Selection);
/// assert_eq!(trace.final_frame(), &[1, 3, 5, 8]);
/// assert_eq!(trace.operations(), 6);
/// ```
pub fn sort_trace(values: &[i64], algorithm: SortAlgorithm) -> SortTrace {
    let started = Instant::now();
    let (frames, operations) = match algorithm {
        SortAlgorithm::Selection => selection::trace(values),
        SortAlgorithm::Quick => quick::trace(values),
        SortAlgorithm::Bubble => bubble::trace(values),
    };
    let elapsed = started.elapsed();

    debug!(
        algorithm:% = algorithm,
        len = values.len(),
        frames = frames.len(),
        operations;
        "Sort trace computed"
    );
    trace!(frames:?; "Sort frames");

    SortTrace::new(frames, operations, elapsed)
}

/// Collects frames while an algorithm mutates its working copy.
struct Recorder {
    values: Vec<i64>,
    frames: Vec<Frame>,
    operations: u64,
}

impl Recorder {
    fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            frames: vec![values.to_vec()],
            operations: 0,
        }
    }

    fn count(&mut self) {
        self.operations += 1;
    }

    /// Swaps two elements and records the resulting frame.
    fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.frames.push(self.values.clone());
    }

    fn finish(self) -> (Vec<Frame>, u64) {
        (self.frames, self.operations)
    }
}
