use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for vaporize-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The command line, rendered as source code for diagnostics.
///
/// Tokens are joined with single spaces so each token can be labelled with
/// its own span.
#[derive(Debug, Clone)]
pub struct ArgsSource {
    line: String,
    spans: Vec<SourceSpan>,
}

impl ArgsSource {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut line = String::new();
        let mut spans = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let token = token.as_ref();
            spans.push(SourceSpan::from((line.len(), token.len())));
            line.push_str(token);
        }
        Self { line, spans }
    }

    /// Span of the token at `index` in the original token list.
    pub fn span(&self, index: usize) -> SourceSpan {
        self.spans
            .get(index)
            .copied()
            .unwrap_or_else(|| SourceSpan::from((self.line.len(), 0)))
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new("arguments", self.line.clone())
    }

    pub fn insufficient_arguments(&self, found: usize) -> Box<Error> {
        Box::new(Error::InsufficientArguments {
            src: self.named_source(),
            span: SourceSpan::from((0, self.line.len())),
            found,
        })
    }

    pub fn malformed_field(&self, token: impl Into<String>, index: usize) -> Box<Error> {
        Box::new(Error::MalformedField {
            src: self.named_source(),
            span: self.span(index),
            token: token.into(),
        })
    }

    pub fn unsupported_type(&self, name: impl Into<String>, index: usize) -> Box<Error> {
        Box::new(Error::UnsupportedType {
            src: self.named_source(),
            span: self.span(index),
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("expected a model name and at least one field, found {found} argument(s)")]
    #[diagnostic(
        code(vaporize::insufficient_arguments),
        help("usage: vaporize model <Name> <field:type>... e.g. 'vaporize model User name:string age:int!'")
    )]
    InsufficientArguments {
        #[source_code]
        src: NamedSource<String>,
        #[label("needs a name and a field")]
        span: SourceSpan,
        found: usize,
    },

    #[error("malformed field '{token}'")]
    #[diagnostic(
        code(vaporize::malformed_field),
        help("write fields as 'name:type', or 'name:type!' for an optional field")
    )]
    MalformedField {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected exactly one ':'")]
        span: SourceSpan,
        token: String,
    },

    #[error("field '{name}' has no type")]
    #[diagnostic(
        code(vaporize::unsupported_type),
        help("valid types are int, string, double, float, bool or the name of another model")
    )]
    UnsupportedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("type missing after ':'")]
        span: SourceSpan,
        name: String,
    },

    #[error("'{}' is not a Vapor project", path.display())]
    #[diagnostic(
        code(vaporize::not_a_project),
        help("run vaporize from a directory containing Package.swift, or pass --project")
    )]
    NotAProject { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(vaporize::config_error))]
    Config {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Self::Config {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
