//! Terminal UI components.

/// Progress spinner for network-bound batches.
pub mod spinner;

/// Color and formatting helpers.
pub mod theme;

pub use spinner::Spinner;
pub use theme::Style;
