//! Model specifications and project configuration for vaporize.
//!
//! [`parse`] turns the command-line tokens of `vaporize model` into a
//! [`ModelSpec`]; [`Project`] locates a Vapor project and its
//! `vaporize.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod field;
mod model;
mod naming;
mod parse;
mod project;

pub use config::{CONFIG_FILE, PathsConfig, ProjectConfig};
pub use error::{ArgsSource, Error, Result};
pub use field::{FieldError, FieldSpec, FieldType, OPTIONAL_MARKER, ScalarType, TYPE_SEPARATOR};
pub use model::{ModelFlags, ModelSpec};
pub use naming::{EntityName, ModelCase, NamePolicy};
pub use parse::{parse, parse_with_policy};
pub use project::{PROJECT_MARKER, Project};
