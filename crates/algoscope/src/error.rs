//! Error types for algoscope operations.
//!
//! This module provides the main error type [`AlgoscopeError`]. Expected
//! outcomes such as an unreachable goal, an empty dataset passed to a sort,
//! or a cancelled run are not errors; only invalid arguments are.

use std::io;

use thiserror::Error;

use algoscope_core::grid::GridError;

/// The main error type for algoscope operations.
#[derive(Debug, Error)]
pub enum AlgoscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
