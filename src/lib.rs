//! `ndecay` is a small toolkit of libraries for decay chain activity
//! calculations
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ndecay_format as format;

#[doc(inline)]
pub use ndecay_nuclide as nuclide;

#[cfg(feature = "data")]
#[cfg_attr(docsrs, doc(cfg(feature = "data")))]
#[doc(inline)]
pub use ndecay_data as data;

#[cfg(feature = "chain")]
#[cfg_attr(docsrs, doc(cfg(feature = "chain")))]
#[doc(inline)]
pub use ndecay_chain as chain;
