//! Core utilities and types for the vaporize scaffolding generator.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by the manifest, codegen and CLI crates.

mod file;
mod transaction;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use transaction::{CommitError, Transaction};
// String utilities
pub use utils::{capitalize_first, line_ending, pluralize};
