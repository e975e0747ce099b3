//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`Fragment`] - Contributions joined for one template slot
//! - [`Indent`], [`IndentPolicy`], [`Depth`] - Indentation configuration

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::{Fragment, Layout};
pub use indent::{Depth, Indent, IndentPolicy};
