// standard library
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

// ndecay modules
use ndecay_format::{f, NumFormat};

// internal modules
use crate::error::Result;
use crate::nuclide::Nuclide;

/// A mixture of nuclides and their activities
///
/// A [Spectrum] is used both for the parent nuclides going into a decay
/// calculation, and the full set of nuclides coming out of it.
///
/// Symbols are unique. Adding a nuclide that is already present sums the
/// activities rather than appending a second entry, so the same nuclide
/// reached through different routes always ends up as one entry.
///
/// ```rust
/// # use ndecay_nuclide::{Nuclide, Spectrum};
/// let mut spectrum = Spectrum::new();
/// spectrum.add(Nuclide::new("Co-60", 100.0).unwrap());
/// spectrum.add(Nuclide::new("cs137", 50.0).unwrap());
/// spectrum.add(Nuclide::new("co60", 25.0).unwrap());
///
/// assert_eq!(spectrum.len(), 2);
/// assert_eq!(spectrum.get("Co-60").unwrap().activity, 125.0);
/// assert!(spectrum.contains("Cs-137"));
/// ```
///
/// Insertion order is preserved for iteration and display, and lookups by
/// symbol go through a hash index.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Nuclide>", into = "Vec<Nuclide>")]
pub struct Spectrum {
    nuclides: Vec<Nuclide>,
    index: HashMap<String, usize>,
}

impl Spectrum {
    /// New empty spectrum
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a nuclide, summing activities with any existing entry
    ///
    /// Decay properties already on the existing entry are kept, otherwise
    /// they are taken from the new nuclide.
    pub fn add(&mut self, nuclide: Nuclide) {
        match self.index.get(nuclide.symbol()) {
            Some(&i) => {
                let existing = &mut self.nuclides[i];
                existing.activity += nuclide.activity;
                if existing.decay.is_none() {
                    existing.decay = nuclide.decay;
                }
            }
            None => {
                self.index
                    .insert(nuclide.symbol().to_string(), self.nuclides.len());
                self.nuclides.push(nuclide);
            }
        }
    }

    /// Add an activity for a symbol in any reasonable format
    pub fn add_activity(&mut self, symbol: &str, activity: f64) -> Result<()> {
        self.add(Nuclide::new(symbol, activity)?);
        Ok(())
    }

    /// Check for a nuclide by canonical symbol
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Position of a nuclide by canonical symbol
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    /// Find a nuclide by canonical symbol
    pub fn get(&self, symbol: &str) -> Option<&Nuclide> {
        self.index_of(symbol).map(|i| &self.nuclides[i])
    }

    /// Find a mutable nuclide by canonical symbol
    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Nuclide> {
        self.index_of(symbol).map(|i| &mut self.nuclides[i])
    }

    /// Activity of a nuclide by canonical symbol, zero if not present
    pub fn activity(&self, symbol: &str) -> f64 {
        self.get(symbol).map_or(0.0, |n| n.activity)
    }

    /// Number of unique nuclides
    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    /// Check for an empty spectrum
    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }

    /// Iterate over nuclides in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Nuclide> {
        self.nuclides.iter()
    }

    /// Collection of canonical symbols in insertion order
    pub fn symbols(&self) -> Vec<&str> {
        self.nuclides.iter().map(|n| n.symbol()).collect()
    }

    /// Sum of every activity (Bq)
    pub fn total_activity(&self) -> f64 {
        self.nuclides.iter().map(|n| n.activity).sum()
    }

    /// Serialise to a pretty JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialise from a JSON list of nuclides
    ///
    /// ```rust
    /// # use ndecay_nuclide::Spectrum;
    /// let json = r#"[
    ///     {"symbol": "co60", "activity": 10.0},
    ///     {"symbol": "Co-60", "activity": 5.0}
    /// ]"#;
    ///
    /// let spectrum = Spectrum::from_json(json).unwrap();
    /// assert_eq!(spectrum.len(), 1);
    /// assert_eq!(spectrum.activity("Co-60"), 15.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<Nuclide>> for Spectrum {
    fn from(nuclides: Vec<Nuclide>) -> Self {
        nuclides.into_iter().collect()
    }
}

impl From<Spectrum> for Vec<Nuclide> {
    fn from(spectrum: Spectrum) -> Self {
        spectrum.nuclides
    }
}

impl FromIterator<Nuclide> for Spectrum {
    fn from_iter<I: IntoIterator<Item = Nuclide>>(iter: I) -> Self {
        let mut spectrum = Spectrum::new();
        for nuclide in iter {
            spectrum.add(nuclide);
        }
        spectrum
    }
}

impl Extend<Nuclide> for Spectrum {
    fn extend<I: IntoIterator<Item = Nuclide>>(&mut self, iter: I) {
        for nuclide in iter {
            self.add(nuclide);
        }
    }
}

impl<'a> IntoIterator for &'a Spectrum {
    type Item = &'a Nuclide;
    type IntoIter = std::slice::Iter<'a, Nuclide>;

    fn into_iter(self) -> Self::IntoIter {
        self.nuclides.iter()
    }
}

impl IntoIterator for Spectrum {
    type Item = Nuclide;
    type IntoIter = std::vec::IntoIter<Nuclide>;

    fn into_iter(self) -> Self::IntoIter {
        self.nuclides.into_iter()
    }
}

impl std::ops::Index<usize> for Spectrum {
    type Output = Nuclide;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nuclides[index]
    }
}

impl std::fmt::Display for Spectrum {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{:<8} {:>11}  {:>11}\n", "Nuclide", "Bq", "λ (1/s)");
        for n in &self.nuclides {
            let lambda = match n.decay_constant() {
                Some(l) => l.sci(4, 2),
                None => "none".to_string(),
            };
            s += &f!("{:<8} {}  {:>11}\n", n.symbol(), n.activity.sci(5, 2), lambda);
        }
        s += &f!("{:<8} {}", "Total", self.total_activity().sci(5, 2));
        write!(f, "{s}")
    }
}

/// Intermediate row type for CSV spectra
#[derive(Deserialize, Debug)]
struct SpectrumRow {
    symbol: String,
    activity: f64,
}

/// Read a spectrum from a CSV file of `symbol,activity` records
///
/// The file must have a header, and symbols may be in any reasonable format.
/// Repeated symbols are summed.
///
/// ```text
/// symbol,activity
/// Co-60,1000.0
/// cs137,250.0
/// ```
pub fn read_spectrum_csv<P: AsRef<Path>>(path: P) -> Result<Spectrum> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut spectrum = Spectrum::new();
    for row in rdr.deserialize() {
        let row: SpectrumRow = row?;
        spectrum.add_activity(&row.symbol, row.activity)?;
    }

    debug!(
        "Read {} nuclides from {}",
        spectrum.len(),
        path.as_ref().display()
    );
    Ok(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecayInfo, TimeUnit};

    fn mixture() -> Spectrum {
        let mut spectrum = Spectrum::new();
        spectrum.add_activity("Sr-90", 10.0).unwrap();
        spectrum.add_activity("Co-60", 20.0).unwrap();
        spectrum.add_activity("Cs-137", 30.0).unwrap();
        spectrum
    }

    #[test]
    fn insertion_order_is_kept() {
        let spectrum = mixture();
        assert_eq!(spectrum.symbols(), vec!["Sr-90", "Co-60", "Cs-137"]);
        assert_eq!(spectrum.index_of("Co-60"), Some(1));
        assert_eq!(spectrum[2].symbol(), "Cs-137");
    }

    #[test]
    fn duplicates_are_summed() {
        let mut spectrum = mixture();
        spectrum.add_activity("co-60", 5.0).unwrap();
        assert_eq!(spectrum.len(), 3);
        assert_eq!(spectrum.activity("Co-60"), 25.0);
        assert_eq!(spectrum.total_activity(), 65.0);
    }

    #[test]
    fn existing_metadata_is_kept() {
        let first = DecayInfo::from_half_life(1.0, TimeUnit::Days);
        let second = DecayInfo::from_half_life(2.0, TimeUnit::Days);

        let mut spectrum = Spectrum::new();
        spectrum.add(Nuclide::new("A-1", 1.0).unwrap());
        spectrum.add(Nuclide::new("A-1", 1.0).unwrap().with_decay(first));
        spectrum.add(Nuclide::new("A-1", 1.0).unwrap().with_decay(second));

        assert_eq!(spectrum.get("A-1").unwrap().decay, Some(first));
        assert_eq!(spectrum.activity("A-1"), 3.0);
    }

    #[test]
    fn lookups_use_canonical_symbols() {
        let spectrum = mixture();
        assert!(spectrum.contains("Sr-90"));
        assert!(!spectrum.contains("sr90"));
        assert!(spectrum.get("Y-90").is_none());
        assert_eq!(spectrum.activity("Y-90"), 0.0);
    }

    #[test]
    fn mutable_access() {
        let mut spectrum = mixture();
        spectrum.get_mut("Sr-90").unwrap().activity *= 2.0;
        assert_eq!(spectrum.activity("Sr-90"), 20.0);
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let spectrum = mixture();
        let json = spectrum.to_json().unwrap();
        let back = Spectrum::from_json(&json).unwrap();
        assert_eq!(back, spectrum);
        assert_eq!(back.symbols(), spectrum.symbols());
    }

    #[test]
    fn empty_spectrum() {
        let spectrum = Spectrum::new();
        assert!(spectrum.is_empty());
        assert_eq!(spectrum.total_activity(), 0.0);
        assert_eq!(Spectrum::from_json("[]").unwrap(), spectrum);
    }
}
