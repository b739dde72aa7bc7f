use std::time::Duration;

/// A full snapshot of the array at one point of a sort.
pub type Frame = Vec<i64>;

/// The ordered frames of one sort run.
///
/// The first frame is the untouched input and the last frame is the sorted
/// array. Consecutive frames differ by at most one swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortTrace {
    frames: Vec<Frame>,
    operations: u64,
    elapsed: Duration,
}

impl SortTrace {
    pub fn new(frames: Vec<Frame>, operations: u64, elapsed: Duration) -> Self {
        Self {
            frames,
            operations,
            elapsed,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of comparisons and pointer advances performed.
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Wall time spent computing the trace.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the last frame, which is the sorted array.
    pub fn final_frame(&self) -> &[i64] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

/// One observable step of a step-wise sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    /// Two adjacent elements were compared.
    ///
    /// `operations` and `elapsed` are the running totals including this
    /// comparison.
    Compare {
        left: usize,
        right: usize,
        operations: u64,
        elapsed: Duration,
    },
    /// The two elements of the preceding comparison were swapped.
    Swap { left: usize, right: usize },
    /// The element at `index` reached its final position.
    Settled { index: usize },
}
