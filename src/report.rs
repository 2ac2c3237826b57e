//! Debug-gated, color-coded reporting.
//!
//! The original tool routed every pipeline step through a level-gated colored
//! console. Here that capability is an injected value rather than ambient
//! global state: components receive a [`Reporter`] and never touch process
//! configuration. All reporting goes to stderr so stdout stays clean.

use std::fmt::Display;

use crate::ui::Style;

/// Reporting capability carried through the batch and cleanup pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    debug: bool,
}

impl Reporter {
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub const fn is_debug(self) -> bool {
        self.debug
    }

    /// Trace line for a pipeline step. Only shown under `--debug`.
    pub fn trace<T: Display>(self, message: T) {
        if self.debug {
            eprintln!("{}", Style::trace(message));
        }
    }

    /// User-facing advisory. Always shown.
    pub fn advise<T: Display>(self, message: T) {
        eprintln!("{}", Style::warning(message));
    }

    /// Failure of one unit of work. Always shown.
    pub fn error<T: Display>(self, message: T) {
        eprintln!("{}", Style::error(message));
    }

    /// Completion signal. Always shown.
    pub fn success<T: Display>(self, message: T) {
        eprintln!("{}", Style::success(message));
    }
}
