//! # polyglot - Batch Fan-Out Translation CLI
//!
//! `polyglot` takes text (inline, from a file, or from every file under a
//! directory tree) and fans it out to a translation provider across a set of
//! target languages, writing one output file per (source, language) pair.
//!
//! ## Features
//!
//! - **Fan-out batches**: every target language becomes its own concurrent task
//! - **Configurable layout**: per-language subfolders, custom names/extensions
//! - **Directory batches**: translate whole trees, one artifact set per file
//! - **Cleanup**: `polyglot dec` removes generated output folders
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate inline text into three languages
//! polyglot text "release notes" en fr de
//!
//! # Translate a file, writing next to the source
//! polyglot file ./notes.md "en, ja"
//!
//! # Translate every file under a directory
//! polyglot directory ./docs en es
//!
//! # Dry-run the pipeline without calling the provider
//! polyglot text "hello" en fr --test
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/polyglot/config.toml`:
//!
//! ```toml
//! [output]
//! directory = "translations"
//! extension = "md"
//! dynamic_language_folder = true
//!
//! [provider]
//! endpoint = "https://translate.googleapis.com"
//! ```

/// Batch orchestration: language fan-out, output resolution, completion signaling.
pub mod batch;

/// Selection and deletion of generated output folders.
pub mod cleanup;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities: path validation, traversal, atomic writes.
pub mod fs;

/// Input reading from source files.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation provider client.
pub mod provider;

/// Debug-gated, color-coded reporting.
pub mod report;

/// Terminal UI components (spinner, colors).
pub mod ui;
