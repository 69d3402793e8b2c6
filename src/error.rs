//! Error types for checkcites-build
//!
//! Every packaging operation reports exactly one of four kinds. The underlying
//! cause is kept as `source()` so diagnostics can print the chain, but callers
//! only ever match on the kind.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for packaging operations
pub type PackagingResult<T> = Result<T, PackagingError>;

/// Main error type for packaging operations
#[derive(Error, Debug)]
pub enum PackagingError {
    /// A required command could not be run (missing, not executable, or failed)
    #[error(
        "the command '{command}' has returned an invalid exit value. Chances are the command \
         is not available in the system path. Make sure the command exists and try again. \
         The application will halt now."
    )]
    CommandUnavailable {
        command: String,
        #[source]
        source: ProcessFailure,
    },

    /// A command call failed to spawn or exited abnormally
    #[error(
        "the command call '{command}' has returned an invalid exit value. Chances are the \
         arguments are incorrect. Make sure the call contains valid arguments and try again."
    )]
    InvalidExitValue {
        command: String,
        #[source]
        source: ProcessFailure,
    },

    /// The launcher script could not be written
    #[error(
        "I could not create the shell script for checkcites at {path} due to an IO error. \
         Please make sure the current directory has the correct permissions and try again. \
         The application will halt now."
    )]
    ScriptWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manual page could not be written
    #[error(
        "I could not create the man page for checkcites at {path} due to an IO error. \
         Please make sure the current directory has the correct permissions and try again. \
         The application will halt now."
    )]
    ManPageWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackagingError {
    /// Path of the artifact involved, for write failures
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PackagingError::ScriptWriteFailed { path, .. }
            | PackagingError::ManPageWriteFailed { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Why a child process did not finish successfully
#[derive(Error, Debug)]
pub enum ProcessFailure {
    #[error("failed to start '{program}' in {directory}")]
    Spawn {
        program: String,
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' finished with {status}")]
    Exit { program: String, status: ExitStatus },
}

/// Attempted to build a command line from an empty argument vector
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a command line needs at least a program name")]
pub struct EmptyCommandLine;
