//! Result and Error types for the reference data module

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, data::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ndecay-data`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// A reference data file could not be opened
    #[error("reference data not available from {path:?}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Expected reference data file missing from a data directory
    #[error("reference data file {0:?} not found")]
    MissingDataFile(PathBuf),

    /// Failure to (de)serialise a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to read CSV records
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// Failure to serialize/deserialize a byte stream
    #[error("failed binary (de)serialization")]
    FailedBinaryOp(#[from] Box<bincode::ErrorKind>),

    /// Invalid symbols or units in the reference data
    #[error("invalid reference data")]
    Nuclide(#[from] ndecay_nuclide::Error),
}
