use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::SettingType;

/// Result type for settgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the definition text and its filename so that errors can carry a
/// miette [`NamedSource`] with a span pointing at the offending line.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an error for a line that does not have exactly three fields.
    pub fn line_format_error(&self, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::LineFormat {
            src: self.named_source(),
            span: Some(span.into()),
        })
    }

    /// Create an error for an unknown type token.
    pub fn unsupported_type_error(
        &self,
        token: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnsupportedType {
            src: self.named_source(),
            span: Some(span.into()),
            token: token.into(),
        })
    }

    /// Create an error for a default value that does not parse under its type.
    pub fn invalid_value_error(
        &self,
        ty: SettingType,
        raw: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidValue {
            src: self.named_source(),
            span: Some(span.into()),
            ty: ty.as_str(),
            raw: raw.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the settings file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Incorrect line format. Valid format prop:type:defaultvalue")]
    #[diagnostic(
        code(settgen::line_format),
        help("each non-blank line must contain exactly two ':' separators")
    )]
    LineFormat {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid line")]
        span: Option<SourceSpan>,
    },

    #[error("Type not supported -> {token}")]
    #[diagnostic(
        code(settgen::unsupported_type),
        help("supported types are: string, int, bool, guid, long")
    )]
    UnsupportedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        token: String,
    },

    #[error("It is not possible parse some value based on the type -> {ty} - {raw}")]
    #[diagnostic(code(settgen::invalid_value))]
    InvalidValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("default value does not parse as '{ty}'")]
        span: Option<SourceSpan>,
        ty: &'static str,
        raw: String,
    },
}

impl Error {
    /// Create an error for a file that could not be read.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
