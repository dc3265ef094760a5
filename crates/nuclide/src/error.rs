//! Result and Error types for ndecay-nuclide

/// Type alias for `Result<T, nuclide::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ndecay-nuclide` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to read CSV records
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// No element letters anywhere in the symbol
    #[error("no element found in nuclide symbol \"{hint}\"")]
    InvalidSymbol { hint: String },

    /// No mass number digits anywhere in the symbol
    #[error("no mass number found in nuclide symbol \"{hint}\"")]
    MissingMassNumber { hint: String },

    /// Time unit not recognised from any known code or name
    #[error("failed to infer time unit from \"{hint}\"")]
    UnknownTimeUnit { hint: String },

    /// Generic error type for nom parser results
    #[error("parser failed: {0}")]
    ParseError(String),

    /// End date before the start date
    #[error("decay time can not be negative ({days} days)")]
    NegativeDecayTime { days: i64 },

    /// Decay time too large to represent in seconds
    #[error("{value} {unit} overflows when converted to seconds")]
    DecayTimeOverflow { value: u64, unit: crate::TimeUnit },
}
