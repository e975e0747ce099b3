//! All-or-nothing writes across several files.
//!
//! A [`Transaction`] stages every file into a temporary sibling of its
//! destination before touching any target. Targets are then replaced one by
//! one with an atomic rename; if a rename fails, targets already replaced are
//! restored to their previous content (or removed if they did not exist).
//! Directories created for staging are removed again when the commit fails.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::{NamedTempFile, PersistError};
use thiserror::Error;

use crate::{File, Overwrite, WriteResult};

/// Error raised while committing a [`Transaction`].
#[derive(Debug, Error)]
pub enum CommitError {
    /// A file could not be staged; no target was modified.
    #[error("failed to stage '{}'", path.display())]
    Stage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A staged file could not replace its target; earlier targets were rolled back.
    #[error("failed to write '{}'", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
        /// Targets restored to their previous state.
        rolled_back: Vec<PathBuf>,
    },
}

impl CommitError {
    /// The file the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Stage { path, .. } | Self::Persist { path, .. } => path,
        }
    }
}

/// An ordered set of files written together.
#[derive(Debug, Default)]
pub struct Transaction {
    files: Vec<File>,
}

struct Staged {
    path: PathBuf,
    temp: NamedTempFile,
    original: Option<Vec<u8>>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the transaction.
    pub fn stage(mut self, file: File) -> Self {
        self.files.push(file);
        self
    }

    /// Files in commit order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Write every file, or none of them.
    pub fn commit(self) -> Result<Vec<(PathBuf, WriteResult)>, CommitError> {
        let mut results = Vec::with_capacity(self.files.len());
        let mut staged = Vec::with_capacity(self.files.len());
        let mut created_dirs = Vec::new();

        for file in &self.files {
            if file.rules().overwrite == Overwrite::IfMissing && file.exists() {
                results.push((file.path().to_path_buf(), WriteResult::Skipped));
                continue;
            }
            match stage(file, &mut created_dirs) {
                Ok(file) => staged.push(file),
                Err(err) => {
                    // Temporaries live in the created directories.
                    drop(staged);
                    remove_dirs(&created_dirs);
                    return Err(err);
                }
            }
            results.push((file.path().to_path_buf(), WriteResult::Written));
        }

        let mut persisted: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
        let mut pending = staged.into_iter();

        while let Some(Staged {
            path,
            temp,
            original,
        }) = pending.next()
        {
            match temp.persist(&path) {
                Ok(_) => {
                    tracing::debug!(path = %path.display(), "replaced target");
                    persisted.push((path, original));
                }
                Err(PersistError { error, file }) => {
                    drop(file);
                    drop(pending);
                    let rolled_back = rollback(persisted);
                    remove_dirs(&created_dirs);
                    return Err(CommitError::Persist {
                        path,
                        source: error,
                        rolled_back,
                    });
                }
            }
        }

        Ok(results)
    }
}

/// Stage `file` next to its target. Directories it had to create are
/// appended to `created_dirs`, outermost first.
fn stage(file: &File, created_dirs: &mut Vec<PathBuf>) -> Result<Staged, CommitError> {
    let path = file.path().to_path_buf();
    let to_stage_error = |source| CommitError::Stage {
        path: path.clone(),
        source,
    };

    let original = if path.is_file() {
        Some(fs::read(&path).map_err(to_stage_error)?)
    } else {
        None
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut missing: Vec<PathBuf> = dir
        .ancestors()
        .take_while(|ancestor| !ancestor.as_os_str().is_empty() && !ancestor.exists())
        .map(Path::to_path_buf)
        .collect();
    missing.reverse();
    let created = fs::create_dir_all(&dir);
    created_dirs.append(&mut missing);
    created.map_err(to_stage_error)?;

    let mut temp = NamedTempFile::new_in(&dir).map_err(to_stage_error)?;
    temp.write_all(file.content().as_bytes())
        .and_then(|()| temp.flush())
        .map_err(to_stage_error)?;

    tracing::debug!(path = %path.display(), temp = %temp.path().display(), "staged file");

    Ok(Staged {
        path,
        temp,
        original,
    })
}

fn rollback(persisted: Vec<(PathBuf, Option<Vec<u8>>)>) -> Vec<PathBuf> {
    let mut restored = Vec::with_capacity(persisted.len());
    for (path, original) in persisted.into_iter().rev() {
        let outcome = match &original {
            Some(bytes) => fs::write(&path, bytes),
            None => fs::remove_file(&path),
        };
        match outcome {
            Ok(()) => restored.push(path),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to roll back file");
            }
        }
    }
    restored
}

/// Remove directories created while staging, innermost first. Only empty
/// directories are removed.
fn remove_dirs(created_dirs: &[PathBuf]) {
    for dir in created_dirs.iter().rev() {
        if let Err(err) = fs::remove_dir(dir) {
            tracing::warn!(path = %dir.display(), error = %err, "failed to remove directory");
        }
    }
}
