//! Error handling for vuez.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort project creation.
///
/// Every variant is fatal for the run: there is no retry and no cleanup of
/// files that were already written.
#[derive(Error, Debug)]
pub enum Error {
    /// A file system operation on a specific path failed.
    #[error("IO error on '{}': {source}.", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template tree could not be enumerated.
    #[error("IO error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// A templated file could not be parsed or rendered.
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// The template context could not be converted for rendering.
    #[error("Serialization error: {0}.")]
    SerializationError(#[from] serde_json::Error),

    /// The requested project name cannot be used as a directory name.
    #[error("Invalid project name: '{0}'.")]
    InvalidProjectName(String),

    /// The template root is missing or is not a directory.
    #[error("Template directory not found: '{}'.", .0.display())]
    TemplateRootNotFound(PathBuf),
}

impl Error {
    /// Wraps an [`io::Error`] together with the path it happened on.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::IoError { path: path.as_ref().to_path_buf(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
