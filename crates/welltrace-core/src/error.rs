//! Error handling for Welltrace
//!
//! The geometry and scene-building layers are total over well-formed
//! input: degenerate geometry (empty wells, zero spans, zero radii) is
//! normalized to safe defaults rather than signaled. The only error
//! worth surfacing is a dataset that violates the basic shape contract,
//! which must fail fast before any geometry runs.
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Welltrace error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A well point did not have exactly four components.
    #[error("malformed well point: expected 4 components (x, y, z, md), got {len}")]
    MalformedWellPoint {
        /// Number of components actually supplied.
        len: usize,
    },

    /// A named well contained a malformed point.
    #[error("well '{well}', point {index}: {source}")]
    InvalidWell {
        /// Name of the offending well.
        well: String,
        /// Index of the offending point within the well's sequence.
        index: usize,
        /// The underlying shape violation.
        source: Box<Error>,
    },
}

/// Result type alias for Welltrace operations.
pub type Result<T> = std::result::Result<T, Error>;
