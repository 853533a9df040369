//! Project creation: the `create` command's orchestration.
//! Checks the target name, creates the project root, walks the template tree
//! and materializes the collected files.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::materializer::{materialize, TemplateContext};
use crate::renderer::TemplateRenderer;
use crate::walker::walk;

/// Result of a [`create_project`] call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The project was generated at `path`.
    Created { path: PathBuf },
    /// An entry with the project name was already present; nothing changed.
    AlreadyExists { path: PathBuf },
}

/// Accepts names that form exactly one normal path component.
fn validate_app_name(app_name: &str) -> Result<()> {
    let mut components = Path::new(app_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == app_name => Ok(()),
        _ => Err(Error::InvalidProjectName(app_name.to_string())),
    }
}

/// Creates project `app_name` inside `working_dir` from `template_root`.
///
/// If `working_dir` already contains an entry named `app_name` (a file,
/// directory or even a dangling symlink), the file system is left untouched
/// and [`CreateOutcome::AlreadyExists`] is returned.
///
/// # Arguments
/// * `app_name` - Project name; also bound as `name` in templated files
/// * `working_dir` - Directory the project is created in
/// * `template_root` - Template tree to copy
/// * `renderer` - Engine used for templated files
///
/// # Errors
/// * `Error::InvalidProjectName` if `app_name` is empty or not a single path
///   component
/// * `Error::TemplateRootNotFound` if `template_root` is not a directory
/// * Any walker or materializer error; already written files are kept
pub fn create_project<P: AsRef<Path>, Q: AsRef<Path>>(
    app_name: &str,
    working_dir: P,
    template_root: Q,
    renderer: &dyn TemplateRenderer,
) -> Result<CreateOutcome> {
    validate_app_name(app_name)?;
    let template_root = template_root.as_ref();
    let project_root = working_dir.as_ref().join(app_name);

    if fs::symlink_metadata(&project_root).is_ok() {
        debug!("Refusing to overwrite {}", project_root.display());
        return Ok(CreateOutcome::AlreadyExists { path: project_root });
    }
    if !template_root.is_dir() {
        return Err(Error::TemplateRootNotFound(template_root.to_path_buf()));
    }

    fs::create_dir(&project_root).map_err(|e| Error::io(&project_root, e))?;
    debug!("Created project root: {}", project_root.display());

    let tasks = walk(&project_root, template_root)?;
    debug!("Collected {} files from {}", tasks.len(), template_root.display());

    materialize(&tasks, &TemplateContext::new(app_name), renderer)?;

    Ok(CreateOutcome::Created { path: project_root })
}
