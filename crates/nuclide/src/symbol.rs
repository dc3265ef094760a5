//! Normalisation of isotope symbols
//!
//! Symbols arrive from spreadsheets, reference tables and users in all sorts
//! of formats (`co60`, `CO-60`, `60Co`, `Am241m`). Everything is reduced to a
//! canonical `<Element>-<MassNumber>[m]` form so that a symbol can be used as
//! a key.

// ndecay modules
use ndecay_format::{element_case, f};

// internal modules
use crate::error::{Error, Result};

/// Normalise an isotope symbol to the canonical `<Element>-<MassNumber>[m]`
///
/// Rules applied to the input:
///
/// - The first letter found starts the element, and the character after it
///   is included if it is also a letter (elements are at most two letters)
/// - Every digit in the input, in order, forms the mass number
/// - An `m` or `M` is kept as the metastable marker only if it immediately
///   follows a digit
/// - Anything else is dropped
///
/// ```rust
/// # use ndecay_nuclide::normalise;
/// assert_eq!(normalise("co60").unwrap(), "Co-60");
/// assert_eq!(normalise("CO_60").unwrap(), "Co-60");
/// assert_eq!(normalise("Am241m").unwrap(), "Am-241m");
/// assert_eq!(normalise("u 235").unwrap(), "U-235");
///
/// // canonical symbols are left untouched
/// assert_eq!(normalise("Ba-137m").unwrap(), "Ba-137m");
/// ```
///
/// Symbols without any element letters, or without a mass number, are
/// rejected rather than partially normalised.
///
/// ```rust
/// # use ndecay_nuclide::normalise;
/// assert!(normalise("60").is_err());
/// assert!(normalise("Co").is_err());
/// ```
pub fn normalise(symbol: &str) -> Result<String> {
    let element = element(symbol).ok_or_else(|| Error::InvalidSymbol {
        hint: symbol.to_string(),
    })?;

    let mass = mass_number(symbol);
    if mass.is_empty() {
        return Err(Error::MissingMassNumber {
            hint: symbol.to_string(),
        });
    }

    Ok(f!("{element}-{mass}"))
}

/// Element prefix from the first one or two consecutive letters
fn element(symbol: &str) -> Option<String> {
    let start = symbol.find(|c: char| c.is_ascii_alphabetic())?;
    let rest = &symbol[start..];

    let length = match rest.chars().nth(1) {
        Some(c) if c.is_ascii_alphabetic() => 2,
        _ => 1,
    };

    Some(element_case(&rest[..length]))
}

/// Mass number digits, including metastable markers that follow a digit
fn mass_number(symbol: &str) -> String {
    let mut mass = String::new();
    let mut previous: Option<char> = None;

    for c in symbol.chars() {
        if c.is_ascii_digit() {
            mass.push(c);
        } else if c.eq_ignore_ascii_case(&'m') && previous.is_some_and(|p| p.is_ascii_digit()) {
            mass.push('m');
        }
        previous = Some(c);
    }
    mass
}
