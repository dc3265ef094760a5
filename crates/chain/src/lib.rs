//! Branching decay chain solver
//!
//! Decays a [Spectrum](ndecay_nuclide::Spectrum) of parent nuclides for some
//! [DecayTime](ndecay_nuclide::DecayTime), following every daughter known to
//! the reference data and giving the activity of everything reached.
//!
//! ## Method
//!
//! Branching decay chains are split into every linear path from a parent to
//! each of its descendants. The activity of the last nuclide on a path of
//! length `n` after time `t` is
//!
//! ```text
//!              ⎛ n   ⎞   n
//!  A(t) = N₁   ⎜ Π bᵢ⎟   Σ  λᵢ exp(-λᵢ t) / Π (1 - λᵢ/λⱼ)
//!              ⎝i=1  ⎠  i=1                 j≠i
//! ```
//!
//! where `N₁ = A₁/λ₁` is the initial number of parent atoms and `bᵢ` is the
//! branching ratio into node `i`. The contributions of every path are summed
//! for each nuclide, so daughters reachable by several routes, or from
//! several parents, get their total activity.
//!
//! ## Example
//!
//! ```rust
//! # use ndecay_chain::DecaySolver;
//! # use ndecay_nuclide::{DecayTime, Spectrum, TimeUnit};
//! let table = ndecay_data::read_dir("./data").unwrap();
//!
//! let mut input = Spectrum::new();
//! input.add_activity("Mo-99", 1.0e6).unwrap();
//!
//! let solution = DecaySolver::new(&table)
//!     .compute(&input, DecayTime::new(1, TimeUnit::Days))
//!     .unwrap();
//!
//! // both branches of molybdenum-99 end up at technetium-99
//! assert_eq!(solution.spectrum.symbols(), ["Mo-99", "Tc-99m", "Tc-99"]);
//! assert!(solution.is_complete());
//! ```
//!
//! Nuclides with no reference data end their chain without contributing, and
//! are listed in [Solution::unknown] rather than treated as errors.

// Modules
mod error;
mod options;
mod path;
mod solver;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use options::{SolverOptions, DEFAULT_MAX_DEPTH};

#[doc(inline)]
pub use path::{ChainNode, DecayPath};

#[doc(inline)]
pub use solver::{compute_spectrum, DecaySolver, Solution};
