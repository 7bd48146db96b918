use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run. Each variant renders as a single line
/// behind the top-level `Error:` prefix; none carries a `source()` chain.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file '{}' not found", .0.display())]
    MissingInput(PathBuf),

    #[error("{0}")]
    MalformedInput(String),

    #[error("Byte value {0} outside 0-255 range")]
    InvalidByteValue(i64),

    #[error("Data doesn't appear to be gzip compressed (missing magic number)")]
    NotGzip,

    #[error("Invalid gzip data: {0}")]
    CorruptGzip(String),

    #[error("Decompressed data is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Error saving file {}: {err}", .path.display())]
    Write { path: PathBuf, err: io::Error },

    #[error("Operation cancelled by user")]
    Cancelled,
}
