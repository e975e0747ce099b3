use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use vaporize_core::CommitError;

/// Result type for vaporize-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("template '{}' not found", path.display())]
    #[diagnostic(
        code(vaporize::template_not_found),
        help("remove the templates override to use the built-in templates")
    )]
    TemplateNotFound { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(vaporize::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("registration file '{}' not found", path.display())]
    #[diagnostic(
        code(vaporize::target_not_found),
        help("set [paths].registration in vaporize.toml to the file that appends preparations")
    )]
    TargetNotFound { path: PathBuf },

    #[error("registration file '{}' does not end with two closing braces", path.display())]
    #[diagnostic(
        code(vaporize::malformed_target),
        help("the last two non-empty lines must close the setup method and its extension")
    )]
    MalformedTarget {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected '}}' here")]
        span: SourceSpan,
    },

    #[error("model file '{}' already exists", path.display())]
    #[diagnostic(
        code(vaporize::model_exists),
        help("pass --force to overwrite it")
    )]
    ModelExists { path: PathBuf },

    #[error("failed to write generated files")]
    #[diagnostic(code(vaporize::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: CommitError,
    },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Read {
            path: path.into(),
            source,
        })
    }

    pub fn malformed_target(path: impl Into<PathBuf>, content: &str, span: SourceSpan) -> Box<Self> {
        let path = path.into();
        Box::new(Self::MalformedTarget {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span,
            path,
        })
    }

    pub fn write_failed(source: CommitError) -> Box<Self> {
        Box::new(Self::WriteFailed {
            path: source.path().to_path_buf(),
            source,
        })
    }
}
