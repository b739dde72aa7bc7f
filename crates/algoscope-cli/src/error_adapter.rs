//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Every error gets
//! a stable diagnostic code and, where the fix is obvious, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use algoscope::{AlgoscopeError, grid::GridError};

use crate::{CliError, player::PlayerError};

/// Adapter that renders a [`CliError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            CliError::Algoscope(AlgoscopeError::Io(err)) => Some(err),
            CliError::Player(PlayerError::Io(err)) => Some(err),
            _ => None,
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Algoscope(AlgoscopeError::Io(_)) => "algoscope::io",
            CliError::Algoscope(AlgoscopeError::Grid(_)) => "algoscope::grid",
            CliError::Algoscope(AlgoscopeError::Config(_)) => "algoscope::config",
            CliError::Algoscope(AlgoscopeError::InvalidArgument(_)) => {
                "algoscope::invalid_argument"
            }
            CliError::Player(_) => "algoscope::playback",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Algoscope(AlgoscopeError::Grid(
                GridError::ZeroSize | GridError::TooLarge(_),
            )) => "pass a smaller positive value to --size or set grid.size",
            CliError::Algoscope(AlgoscopeError::Grid(GridError::DensityOutOfRange(_))) => {
                "--density and --forest are percentages that must add up to at most 100"
            }
            CliError::Algoscope(AlgoscopeError::Config(_)) => {
                "check the file passed to --config or algoscope/config.toml"
            }
            CliError::Player(PlayerError::AlreadyRunning) => {
                "wait for the current playback to finish"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wraps a [`CliError`] for rendering.
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
