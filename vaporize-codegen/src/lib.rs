//! Swift code generation for vaporize.
//!
//! The pipeline for a model is parse (in `vaporize-manifest`), then
//! [`assemble`] into a [`FragmentBundle`], then [`Template::render`]. The
//! generators in [`generator`] add the registration splice and write the
//! results transactionally.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Fragment, IndentPolicy)
//! - [`files`] - Files written into a Vapor project
//! - [`generator`] - Request planning, dry-run previews and writes
//! - [`registration`] - Appending preparations to the setup file

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod assemble;
pub mod builder;
mod bundle;
mod error;
pub mod files;
pub mod generator;
mod placeholder;
pub mod registration;
mod template;

pub use assemble::{Assembler, assemble};
pub use bundle::FragmentBundle;
pub use error::{Error, Result};
pub use generator::{
    ControllerGenerator, GenerateResult, ModelGenerator, ModelPlan, PreviewFile, Registration,
    ViewGenerator,
};
pub use placeholder::Placeholder;
pub use template::{Template, TemplateKind, TemplateOrigin};
