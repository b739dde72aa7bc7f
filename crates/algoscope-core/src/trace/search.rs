use std::time::Duration;

/// A single probe of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStep {
    /// Index that was inspected.
    pub index: usize,
    /// Value found at `index`.
    pub value: i64,
    /// Whether `value` equals the target.
    pub matched: bool,
    /// Lower bound (inclusive) of the remaining search window.
    pub low: usize,
    /// Upper bound (inclusive) of the remaining search window.
    pub high: usize,
}

/// Outcome of a linear or binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    index: Option<usize>,
    steps: Vec<SearchStep>,
    operations: u64,
    elapsed: Duration,
}

impl SearchResult {
    pub fn new(
        index: Option<usize>,
        steps: Vec<SearchStep>,
        operations: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            index,
            steps,
            operations,
            elapsed,
        }
    }

    /// Returns `true` if the target was found.
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Index of the match, or `None` when the search space was exhausted.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Probes in the order they were made; the last one is the match, if any.
    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
