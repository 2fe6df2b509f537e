use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A definition file failed to parse; the schema diagnostic passes
    /// through untouched so the caller sees exactly one message.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(Box<settgen_schema::Error>),

    #[error("failed to write '{path}'")]
    #[diagnostic(help("check that the output directory is writable"))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an error for an artifact that could not be written.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }
}

impl From<Box<settgen_schema::Error>> for Box<Error> {
    fn from(err: Box<settgen_schema::Error>) -> Self {
        Box::new(Error::Schema(err))
    }
}
