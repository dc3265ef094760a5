//! Result and Error types for ndecay-chain

/// Type alias for `Result<T, chain::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ndecay-chain` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Nothing to decay
    #[error("input spectrum contains no nuclides")]
    EmptySpectrum,

    /// Decay path longer than allowed, usually a cycle in the reference data
    #[error("decay chain exceeds maximum depth of {max_depth} at {symbol}")]
    ChainTooDeep { symbol: String, max_depth: usize },

    /// Invalid symbols or decay times
    #[error("invalid nuclide data")]
    Nuclide(#[from] ndecay_nuclide::Error),
}
