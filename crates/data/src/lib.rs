//! Reference decay data for ndecay
//!
//! Decay chain calculations need two pieces of reference data for every
//! nuclide:
//!
//! - the decay constant (and, for information, the half-life)
//! - the daughters it decays to, with a branching ratio for each
//!
//! The [DecayData] trait is the interface the chain solver works against, so
//! any source of reference data can be used. [DecayTable] is the in-memory
//! implementation, indexed by canonical symbol.
//!
//! ## Loading data
//!
//! Tables are normally read from a pair of CSV files, either directly or from
//! a data directory:
//!
//! ```rust
//! # use ndecay_data::{read_csv, read_dir, DecayData};
//! let table = read_csv("./data/nuclides.csv", "./data/decays.csv").unwrap();
//!
//! // or equivalently
//! let table = read_dir("./data").unwrap();
//!
//! // caesium-137 decays to the metastable barium-137m
//! let branch = &table.daughters("Cs-137")[0];
//! assert_eq!(branch.daughter, "Ba-137m");
//! assert_eq!(branch.branch_ratio, 0.947);
//! ```
//!
//! Full tables can also be written to JSON or a compact binary with
//! [write_json()] and [write_binary()], and read back with [read_json()] and
//! [read_binary()].

// Modules
mod error;
mod load;
mod provider;
mod table;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use provider::{Branch, DecayData};

#[doc(inline)]
pub use table::{DecayRow, DecayTable, NuclideRow, TableRows};

#[doc(inline)]
pub use load::{
    read_binary, read_csv, read_dir, read_json, write_binary, write_json, DECAYS_FILE,
    NUCLIDES_FILE,
};
