// external crates
use serde::{Deserialize, Serialize};

// ndecay modules
use ndecay_nuclide::{DecayInfo, Nuclide};

/// A single parent to daughter decay route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Canonical symbol of the daughter nuclide
    pub daughter: String,
    /// Fraction of parent decays producing this daughter
    pub branch_ratio: f64,
}

/// Source of reference decay data
///
/// Anything that can answer two questions about a canonical symbol can drive
/// a decay chain calculation:
///
/// - What are its decay properties? `None` for anything untracked.
/// - Which daughters does it decay to, and with what branching ratios? Empty
///   for stable nuclides and the ends of chains.
///
/// Lookups are read-only and may be repeated many times for the same symbol
/// during a calculation. Implementations that are expensive to query should
/// cache results themselves.
///
/// Branching ratios are used as given. Nothing checks that they sum to one
/// or less for a parent.
///
/// [DecayTable](crate::DecayTable) is the in-memory implementation.
pub trait DecayData {
    /// Decay properties for a symbol, if tracked
    fn decay_info(&self, symbol: &str) -> Option<DecayInfo>;

    /// Ordered list of daughters for a symbol
    fn daughters(&self, symbol: &str) -> &[Branch];

    /// Fill in decay properties for a nuclide
    ///
    /// Returns `false` and leaves the nuclide untouched if the symbol is not
    /// tracked.
    fn describe(&self, nuclide: &mut Nuclide) -> bool {
        match self.decay_info(nuclide.symbol()) {
            Some(info) => {
                nuclide.decay = Some(info);
                true
            }
            None => false,
        }
    }
}
