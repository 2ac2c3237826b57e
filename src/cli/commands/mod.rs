//! Subcommand implementations.

/// The `dec` cleanup command.
pub mod cleanup;

/// The `file`, `directory`, and `text` translate commands.
pub mod translate;
