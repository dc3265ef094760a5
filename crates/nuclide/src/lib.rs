//! Nuclides, spectra and decay times for ndecay
//!
//! This crate holds the common data model used by the rest of the toolkit:
//!
//! - [Nuclide] is an isotope with an activity, and decay properties
//!   ([DecayInfo]) once they are known from reference data
//! - [Spectrum] is a collection of uniquely keyed nuclides, used for both the
//!   input and output of decay calculations
//! - [DecayTime] and [TimeUnit] describe how long a spectrum has decayed
//!
//! ## Symbols
//!
//! Nuclides are keyed by a canonical symbol of the form
//! `<Element>-<MassNumber>[m]`. Anything reasonable is accepted on the way in
//! and converted with [normalise()].
//!
//! ```rust
//! # use ndecay_nuclide::{normalise, Nuclide};
//! assert_eq!(normalise("am241m").unwrap(), "Am-241m");
//!
//! let nuclide = Nuclide::new("CO60", 1.0).unwrap();
//! assert_eq!(nuclide.symbol(), "Co-60");
//! ```
//!
//! ## Decay times
//!
//! ```rust
//! # use ndecay_nuclide::{DecayTime, TimeUnit};
//! # use std::str::FromStr;
//! let time = DecayTime::from_str("2 d").unwrap();
//! assert_eq!(time.unit, TimeUnit::Days);
//! assert_eq!(time.to_seconds().unwrap(), 172_800);
//! ```

// Split into subfiles for development, but anything important is re-exported
mod error;
mod nuclide;
mod parsers;
mod spectrum;
mod symbol;
mod units;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use nuclide::{DecayInfo, Nuclide};

#[doc(inline)]
pub use spectrum::{read_spectrum_csv, Spectrum};

#[doc(inline)]
pub use symbol::normalise;

#[doc(inline)]
pub use units::{DecayTime, TimeUnit};
