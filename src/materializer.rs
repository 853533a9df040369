//! File materialization.
//! Turns the [`FileTask`]s produced by the walker into files on disk, either
//! by rendering them as templates or by copying them verbatim. Tasks are
//! independent and run concurrently on a scoped worker pool.

use std::fs;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use log::debug;
use serde::Serialize;

use crate::constants::TEMPLATE_EXTENSIONS;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::walker::FileTask;

/// Data exposed to every templated file.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Project name, available as `<%= name %>`.
    pub name: String,
}

impl TemplateContext {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// Returns true if a file with this name is rendered as a template.
///
/// Only the extension (text after the last `.`, compared case-insensitively)
/// is considered, never the content.
pub fn needs_templating(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => {
            let extension = extension.to_ascii_lowercase();
            TEMPLATE_EXTENSIONS.contains(&extension.as_str())
        }
        None => false,
    }
}

/// Count of outstanding tasks shared by the workers.
struct Countdown {
    remaining: AtomicUsize,
}

impl Countdown {
    fn new(total: usize) -> Self {
        Self { remaining: AtomicUsize::new(total) }
    }

    /// Marks one task as done. Returns true for the call that reaches zero.
    fn finish_one(&self) -> bool {
        self.remaining.fetch_sub(1, Ordering::AcqRel) == 1
    }
}

fn materialize_file(
    task: &FileTask,
    context: &serde_json::Value,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    if needs_templating(&task.file_name) {
        debug!("Rendering file: {}", task.dest_path.display());
        // Invalid UTF-8 is replaced rather than rejected.
        let bytes = fs::read(&task.source_path).map_err(|e| Error::io(&task.source_path, e))?;
        let template = String::from_utf8_lossy(&bytes);
        let name = task.source_path.to_string_lossy();
        let content = renderer.render(&name, &template, context)?;
        fs::write(&task.dest_path, content).map_err(|e| Error::io(&task.dest_path, e))
    } else {
        debug!("Copying file: {}", task.dest_path.display());
        let bytes = fs::read(&task.source_path).map_err(|e| Error::io(&task.source_path, e))?;
        fs::write(&task.dest_path, bytes).map_err(|e| Error::io(&task.dest_path, e))
    }
}

/// Writes every task to its destination, rendering or copying as
/// [`needs_templating`] decides. Existing destination files are overwritten.
///
/// Tasks are claimed by a pool of scoped worker threads. A shared countdown
/// tracks outstanding tasks and the worker finishing the last one reports
/// completion. The first failure stops workers from claiming further tasks
/// and is returned once every worker has joined; files written before that
/// point stay on disk.
///
/// # Errors
/// * `Error::IoError` if a source cannot be read or a destination written
/// * `Error::TemplateError` if a templated file fails to render
/// * `Error::SerializationError` if the context cannot be serialized
pub fn materialize(
    tasks: &[FileTask],
    context: &TemplateContext,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    if tasks.is_empty() {
        debug!("No files to materialize");
        return Ok(());
    }

    let context = serde_json::to_value(context)?;
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(tasks.len());

    let next = AtomicUsize::new(0);
    let countdown = Countdown::new(tasks.len());
    let aborted = AtomicBool::new(false);

    let worker = || -> Result<()> {
        while !aborted.load(Ordering::Acquire) {
            let Some(task) = tasks.get(next.fetch_add(1, Ordering::AcqRel)) else {
                break;
            };
            if let Err(err) = materialize_file(task, &context, renderer) {
                aborted.store(true, Ordering::Release);
                return Err(err);
            }
            if countdown.finish_one() {
                debug!("All {} files materialized", tasks.len());
            }
        }
        Ok(())
    };

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers).map(|_| scope.spawn(worker)).collect();
        let mut outcome = Ok(());
        for handle in handles {
            let result = handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            if outcome.is_ok() {
                outcome = result;
            }
        }
        outcome
    })
}
