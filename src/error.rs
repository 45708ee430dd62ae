//! Error types for namespace operations, command handling, and process setup.

use thiserror::Error;

/// Errors raised by namespace operations.
///
/// Every variant is a local, recoverable condition: the interactive loop
/// prints the message and resumes. Operations fail before mutating within a
/// call, with the documented exception that resolve-or-create may leave
/// intermediate directories behind when a later step fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsError {
    /// A path segment did not match an existing child directory during
    /// lookup-only resolution.
    #[error("directory does not exist: {0}")]
    DirectoryNotFound(String),

    /// A creation target collides with an existing file or directory.
    #[error("file exists: {0}")]
    AlreadyExists(String),

    /// A removal target matched neither a child file nor a child directory.
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// A read target does not exist as a file.
    #[error("no file exists with name {0}")]
    FileNotFound(String),

    /// A move source matched neither a child file nor a child directory.
    #[error("source file not found: {0}")]
    SourceNotFound(String),

    /// A directory move would place the directory inside its own subtree.
    #[error("cannot move {0} into its own subtree")]
    MoveIntoSelf(String),
}

/// Errors surfaced by the command layer.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The raw input line could not be interpreted as a command.
    #[error("error parsing command: {0}")]
    Parse(String),

    /// A namespace operation failed while executing the command.
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Errors raised while preparing the process environment.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration could not be loaded or applied.
    #[error("configuration error: {0}")]
    Config(String),
}
