use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(shapegen::io_error),
        help("pass the manifest location with '--config <path>'")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse shapegen.toml")]
    #[diagnostic(code(shapegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate record '{name}'")]
    #[diagnostic(
        code(shapegen::duplicate_record),
        help("record names identify types, so each may only be declared once")
    )]
    DuplicateRecord {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("duplicate field '{name}' in record '{record}'")]
    #[diagnostic(code(shapegen::duplicate_field))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        record: String,
        name: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(shapegen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid type '{ty}' for {context}")]
    #[diagnostic(
        code(shapegen::invalid_type),
        help("{reason}. Types are a primitive name, a record name, 'Option<T>' or '*T'")
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: Option<SourceSpan>,
        ty: String,
        context: String,
        reason: String,
    },

    #[error("unknown root '{name}'")]
    #[diagnostic(
        code(shapegen::unknown_root),
        help("roots must name a record declared with [[record]]")
    )]
    UnknownRoot {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a declared record")]
        span: Option<SourceSpan>,
        name: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
