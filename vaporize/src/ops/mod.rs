//! Core operations.
//!
//! This module contains the work behind each vaporize command,
//! separated from CLI argument parsing and output rendering.

pub mod controller;
pub mod model;
pub mod view;

use std::path::{Path, PathBuf};

use vaporize_codegen::GenerateResult;
use vaporize_core::WriteResult;
use vaporize_manifest::Project;

pub use controller::controller;
pub use model::model;
pub use view::view;

use crate::reports::{WrittenFile, WrittenResult};

/// Path relative to the project root, for display.
fn relative(project: &Project, path: &Path) -> String {
    path.strip_prefix(project.root())
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Summarize committed files; `existing` lists targets present before the write.
fn written(project: &Project, result: &GenerateResult, existing: &[PathBuf]) -> WrittenResult {
    let files = result
        .files
        .iter()
        .map(|(path, outcome)| {
            let shown = relative(project, path);
            match outcome {
                WriteResult::Skipped => WrittenFile::Kept(shown),
                WriteResult::Written if existing.contains(path) => WrittenFile::Updated(shown),
                WriteResult::Written => WrittenFile::Created(shown),
            }
        })
        .collect();

    WrittenResult {
        files,
        ..WrittenResult::default()
    }
}
