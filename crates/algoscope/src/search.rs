//! Search engine.
//!
//! Both searches run to completion in one call and record every probe as a
//! [`SearchStep`]. Pacing the probes for display is left to the renderer.

use std::time::Instant;

use log::debug;

use algoscope_core::trace::{SearchResult, SearchStep};

/// Scans `values` left to right and stops at the first element equal to
/// `target`.
///
/// Every inspected element is one step and one operation.
pub fn linear_search(values: &[i64], target: i64) -> SearchResult {
    let started = Instant::now();
    let high = values.len().saturating_sub(1);
    let mut steps = Vec::new();
    let mut index = None;

    for (i, &value) in values.iter().enumerate() {
        let matched = value == target;
        steps.push(SearchStep {
            index: i,
            value,
            matched,
            low: i,
            high,
        });
        if matched {
            index = Some(i);
            break;
        }
    }

    let operations = steps.len() as u64;
    debug!(sought = target, found = index.is_some(), operations; "Linear search finished");
    SearchResult::new(index, steps, operations, started.elapsed())
}

/// Halves the window `[low, high]` around `floor((low + high) / 2)` until the
/// target is found or the window is empty.
///
/// `values` must already be sorted ascending; the engine does not sort. Each
/// probe is one step and one operation.
///
/// # Examples
///
/// ```
/// use algoscope::search::binary_search;
///
/// let result = binary_search(&[1, 3, 5, 7, 9, 11], 7);
/// assert_eq!(result.index(), Some(3));
/// let probes: Vec<usize> = result.steps().iter().map(|step| step.index).collect();
/// assert_eq!(probes, vec![2, 4, 3]);
/// ```
pub fn binary_search(values: &[i64], target: i64) -> SearchResult {
    let started = Instant::now();
    let mut steps = Vec::new();
    let mut index = None;

    if let Some(last) = values.len().checked_sub(1) {
        let (mut low, mut high) = (0, last);
        while low <= high {
            let mid = (low + high) / 2;
            let value = values[mid];
            let matched = value == target;
            steps.push(SearchStep {
                index: mid,
                value,
                matched,
                low,
                high,
            });
            if matched {
                index = Some(mid);
                break;
            }
            if value < target {
                low = mid + 1;
            } else if let Some(below) = mid.checked_sub(1) {
                high = below;
            } else {
                break;
            }
        }
    }

    let operations = steps.len() as u64;
    debug!(sought = target, found = index.is_some(), operations; "Binary search finished");
    SearchResult::new(index, steps, operations, started.elapsed())
}

/// Linear and binary search run side by side on the same sorted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchComparison {
    sorted: Vec<i64>,
    linear: SearchResult,
    binary: SearchResult,
}

impl SearchComparison {
    /// The ascending copy both searches ran on.
    pub fn sorted(&self) -> &[i64] {
        &self.sorted
    }

    pub fn linear(&self) -> &SearchResult {
        &self.linear
    }

    pub fn binary(&self) -> &SearchResult {
        &self.binary
    }
}

/// Sorts a copy of `values` and runs both searches for `target` on it.
pub fn compare_searches(values: &[i64], target: i64) -> SearchComparison {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let linear = linear_search(&sorted, target);
    let binary = binary_search(&sorted, target);
    SearchComparison {
        sorted,
        linear,
        binary,
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn sorted_strategy() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-30i64..30, 0..64).prop_map(|mut values| {
            values.sort_unstable();
            values
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Both searches agree on whether the target is present, and any index
    /// they report holds the target.
    fn check_searches_agree(values: &[i64], target: i64) -> Result<(), TestCaseError> {
        let linear = linear_search(values, target);
        let binary = binary_search(values, target);

        prop_assert_eq!(linear.found(), binary.found());
        prop_assert_eq!(linear.found(), values.contains(&target));
        for index in [linear.index(), binary.index()].into_iter().flatten() {
            prop_assert_eq!(values[index], target);
        }
        Ok(())
    }

    /// Operation counts stay within the textbook bounds.
    fn check_operation_bounds(values: &[i64], target: i64) -> Result<(), TestCaseError> {
        let n = values.len() as u64;
        let bound = u64::from((n + 1).next_power_of_two().trailing_zeros());
        let linear = linear_search(values, target);
        let binary = binary_search(values, target);

        prop_assert!(linear.operations() <= n);
        prop_assert!(
            binary.operations() <= bound,
            "{} probes for n = {n}, bound {bound}",
            binary.operations()
        );
        prop_assert_eq!(binary.operations(), binary.steps().len() as u64);
        Ok(())
    }

    /// Every probe lies inside its recorded window.
    fn check_probes_inside_window(values: &[i64], target: i64) -> Result<(), TestCaseError> {
        for step in binary_search(values, target).steps() {
            prop_assert!(step.low <= step.index && step.index <= step.high);
            prop_assert_eq!(step.index, (step.low + step.high) / 2);
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn searches_agree(values in sorted_strategy(), target in -35i64..35) {
            check_searches_agree(&values, target)?;
        }

        #[test]
        fn operation_bounds(values in sorted_strategy(), target in -35i64..35) {
            check_operation_bounds(&values, target)?;
        }

        #[test]
        fn probes_inside_window(values in sorted_strategy(), target in -35i64..35) {
            check_probes_inside_window(&values, target)?;
        }
    }
}
