//! Template tree traversal.
//! Mirrors the directory structure of a template root into a destination
//! directory and collects every file that still has to be materialized.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::constants::IGNORE_MARKER;
use crate::error::{Error, Result};

/// One file to materialize: where it comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    /// Bare file name, used to decide whether the file is templated.
    pub file_name: String,
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name() == IGNORE_MARKER
}

/// Walks `source_dir` depth-first, creating each subdirectory under
/// `dest_dir` and returning a [`FileTask`] for every file found.
///
/// `dest_dir` must already exist. Entries named [`IGNORE_MARKER`] are
/// skipped, directories included. Symbolic links are followed, so a linked
/// directory is expanded and a linked file is materialized from its target.
///
/// The order of the returned tasks follows the file system's enumeration
/// order; only completeness is guaranteed.
///
/// # Errors
/// * `Error::WalkError` if an entry cannot be read
/// * `Error::IoError` if a destination directory cannot be created,
///   including when it already exists
pub fn walk<P: AsRef<Path>, Q: AsRef<Path>>(dest_dir: P, source_dir: Q) -> Result<Vec<FileTask>> {
    let dest_dir = dest_dir.as_ref();
    let source_dir = source_dir.as_ref();
    let mut tasks = Vec::new();

    let entries = WalkDir::new(source_dir)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry));

    for entry in entries {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|e| Error::io(entry.path(), io::Error::other(e)))?;
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(|e| Error::io(&target, e))?;
            debug!("Created directory: {}", target.display());
        } else {
            debug!("Found file: {}", entry.path().display());
            tasks.push(FileTask {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                source_path: entry.into_path(),
                dest_path: target,
            });
        }
    }

    Ok(tasks)
}
