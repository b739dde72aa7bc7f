use thiserror::Error;

use algoscope::AlgoscopeError;

use crate::player::PlayerError;

/// Errors returned by [`run`](crate::run).
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Algoscope(#[from] AlgoscopeError),

    #[error(transparent)]
    Player(#[from] PlayerError),
}
