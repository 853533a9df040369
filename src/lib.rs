//! vuez creates new projects from a template tree.
//! It copies the tree into a fresh directory and renders the project name
//! into text files whose extension marks them as templates.

/// Command-line interface module for the vuez application
pub mod cli;

/// Shared constants: ignore marker, templated extensions, template root
pub mod constants;

/// `create` command orchestration
pub mod create;

/// Error types and handling for the vuez application
pub mod error;

/// env_logger setup
pub mod logger;

/// Rendering or copying of collected files
pub mod materializer;

/// Template rendering with EJS-style placeholders
pub mod renderer;

/// Template tree traversal and directory skeleton creation
pub mod walker;
