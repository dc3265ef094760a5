//! Common formatting helpers shared by the ndecay crates
//!
//! Activities and decay constants span dozens of orders of magnitude, so
//! consistent scientific notation is needed almost everywhere something is
//! displayed.

// standard library
use std::fmt::LowerExp;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Scientific notation with a signed, zero-padded exponent
    ///
    /// The `{:e}` formatter drops the exponent sign and padding, which makes
    /// columns of numbers awkward to read.
    ///
    /// ```rust
    /// # use ndecay_format::NumFormat;
    /// assert_eq!((1000.0).sci(5, 2), "1.00000e+03".to_string());
    /// assert_eq!((4.17e-9).sci(3, 2), "4.170e-09".to_string());
    /// assert_eq!((-2.5).sci(1, 3), "-2.5e+000".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let raw = f!("{:.precision$e}", &self, precision = precision);

        // `{:e}` always produces a mantissa and exponent for finite values
        let Some((mantissa, exponent)) = raw.split_once('e') else {
            return raw;
        };

        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };

        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}

/// Formats a run of letters as a chemical element symbol
///
/// The first letter is upper case and the rest lower case, regardless of the
/// original case.
///
/// ```rust
/// # use ndecay_format::element_case;
/// assert_eq!(element_case("co"), "Co".to_string());
/// assert_eq!(element_case("AM"), "Am".to_string());
/// assert_eq!(element_case("u"), "U".to_string());
/// assert_eq!(element_case(""), "".to_string());
/// ```
pub fn element_case(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(first) => first.to_uppercase().chain(c.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
