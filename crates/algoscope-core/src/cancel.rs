//! Cooperative cancellation.
//!
//! Step-wise engines poll a [`CancelToken`] between steps. Setting the flag
//! never interrupts a step that is already in progress; the engine simply
//! stops advancing the next time it checks.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A shared, clonable stop flag.
///
/// All clones observe the same flag, so a renderer can keep one clone and
/// hand another to the engine it drives.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns `true` once [`CancelToken::cancel`] has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_cancelled() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let engine_side = token.clone();

        token.cancel();

        assert!(engine_side.is_cancelled());
    }
}
