/// Handles argument parsing and command dispatch.
pub mod cli;

/// Constants used throughout the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Settings file handling (theme path persisted by `setup`).
pub mod config;

/// The field group data model.
pub mod group;

/// User input and interaction handling.
pub mod prompt;

/// The interactive collection state machine.
pub mod wizard;

/// Stub rendering functionality.
pub mod renderer;

/// Persists rendered artifacts under the theme directory.
pub mod writer;

/// A set of helpers for working with the file system.
pub mod ioutils;
