//! Random input generation for the sorting and search engines.

use log::debug;
use rand::Rng;

use crate::AlgoscopeError;

/// Draws `size` values uniformly from `min..=max`.
///
/// # Errors
///
/// Returns [`AlgoscopeError::InvalidArgument`] if `size` is zero or
/// `min > max`.
///
/// # Examples
///
/// ```
/// use algoscope::dataset::random_values;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let values = random_values(10, 5, 95, &mut rng).unwrap();
/// assert_eq!(values.len(), 10);
/// assert!(values.iter().all(|value| (5..=95).contains(value)));
/// ```
pub fn random_values<R>(
    size: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>, AlgoscopeError>
where
    R: Rng + ?Sized,
{
    if size == 0 {
        return Err(AlgoscopeError::InvalidArgument(
            "dataset size must be at least 1".to_string(),
        ));
    }
    if min > max {
        return Err(AlgoscopeError::InvalidArgument(format!(
            "value range {min}..={max} is empty"
        )));
    }

    let values: Vec<i64> = (0..size).map(|_| rng.random_range(min..=max)).collect();
    debug!(size, min, max; "Dataset generated");
    Ok(values)
}
