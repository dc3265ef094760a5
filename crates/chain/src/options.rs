// external crates
use serde::{Deserialize, Serialize};

/// Default limit on the number of decays followed from a parent
///
/// Natural decay series are around 15 steps, so this is only reached by
/// cycles in the reference data.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for the decay chain solver
///
/// Missing fields take their default values when deserialised.
///
/// ```rust
/// # use ndecay_chain::SolverOptions;
/// let options: SolverOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(options, SolverOptions::default());
/// assert_eq!(options.max_depth, 128);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Maximum number of decays followed along any one path
    pub max_depth: usize,
}

impl SolverOptions {
    /// Builder style setter for the maximum depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
