//! Error types for triangle processing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for triangle operations
pub type Result<T> = std::result::Result<T, TriangleError>;

/// Errors that can occur while validating input, aggregating, or storing
/// artifacts. Parse-level problems are not represented here: malformed rows
/// are skipped by the parser, never raised.
#[derive(Error, Debug)]
pub enum TriangleError {
    /// Failed to read the input file or write an artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file has neither a .txt nor a .csv extension
    #[error("input file must have a .txt or .csv extension: {}", path.display())]
    UnsupportedExtension { path: PathBuf },

    /// Input file exists but contains no bytes
    #[error("input file is empty: {}", path.display())]
    EmptyInput { path: PathBuf },

    /// No records carry an origin year, so nothing can be placed in a triangle
    #[error("no payment records with an origin year; nothing to aggregate")]
    NoRecords,

    /// The earliest origin year lies after the latest development year
    #[error(
        "invalid period range: earliest origin year {min_origin} is after \
         latest development year {max_development}"
    )]
    InvalidPeriodRange {
        min_origin: i32,
        max_development: i32,
    },

    /// Artifact name has no file-name component (e.g. `..`)
    #[error("invalid artifact name: {name}")]
    InvalidArtifactName { name: String },
}
