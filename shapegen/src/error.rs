use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot map type '{ty}' of field '{record}.{field}'")]
    #[diagnostic(
        code(shapegen::unmappable_type),
        help("add a `tstype` override to the field, or skip it with a serialization name of \"-\"")
    )]
    UnmappableType {
        record: String,
        field: String,
        ty: String,
    },

    #[error("'{name}' is not a record type")]
    #[diagnostic(
        code(shapegen::not_a_record),
        help("only structs with named fields can be rendered as interfaces")
    )]
    NotARecord { name: String },

    #[error("record type '{name}' is not registered")]
    #[diagnostic(code(shapegen::unknown_record))]
    UnknownRecord { name: String },

    #[error(transparent)]
    #[diagnostic(code(shapegen::io))]
    Io(#[from] std::io::Error),
}
