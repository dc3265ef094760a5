// standard library
use std::f64::consts::LN_2;

// external crates
use serde::{Deserialize, Deserializer, Serialize};

// ndecay modules
use ndecay_format::NumFormat;

// internal modules
use crate::error::Result;
use crate::symbol::normalise;
use crate::units::TimeUnit;

/// Decay properties of an unstable nuclide
///
/// The decay constant is what the chain calculations use. The half-life and
/// its unit are informational, kept as they appear in the reference data.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayInfo {
    /// Decay constant λ (1/s)
    pub decay_constant: f64,
    /// Half-life in units of `half_life_unit`
    pub half_life: f64,
    /// Unit of the half-life
    pub half_life_unit: TimeUnit,
}

impl DecayInfo {
    /// Decay properties derived from a half-life
    ///
    /// ```rust
    /// # use ndecay_nuclide::{DecayInfo, TimeUnit};
    /// let info = DecayInfo::from_half_life(10.0, TimeUnit::Minutes);
    /// assert_eq!(info.decay_constant, std::f64::consts::LN_2 / 600.0);
    /// ```
    pub fn from_half_life(half_life: f64, unit: TimeUnit) -> Self {
        Self {
            decay_constant: LN_2 / (half_life * unit.seconds() as f64),
            half_life,
            half_life_unit: unit,
        }
    }

    /// Half-life converted to seconds
    pub fn half_life_seconds(&self) -> f64 {
        self.half_life * self.half_life_unit.seconds() as f64
    }
}

/// A nuclide with an activity
///
/// The symbol is always held in the canonical `<Element>-<MassNumber>[m]`
/// form (see [normalise()](crate::normalise)), including when deserialised,
/// so it is safe to use as a key.
///
/// ```rust
/// # use ndecay_nuclide::Nuclide;
/// let nuclide = Nuclide::new("co60", 1.0e3).unwrap();
/// assert_eq!(nuclide.symbol(), "Co-60");
/// assert_eq!(nuclide.activity, 1.0e3);
/// assert_eq!(nuclide.decay_constant(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nuclide {
    /// Canonical isotope symbol
    #[serde(deserialize_with = "from_any_symbol")]
    symbol: String,
    /// Activity (Bq)
    pub activity: f64,
    /// Decay properties from reference data, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay: Option<DecayInfo>,
}

impl Nuclide {
    /// New nuclide from any reasonable symbol format
    pub fn new(symbol: &str, activity: f64) -> Result<Self> {
        Ok(Self {
            symbol: normalise(symbol)?,
            activity,
            decay: None,
        })
    }

    /// Canonical isotope symbol, e.g. `Co-60`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Decay constant λ (1/s), if known
    pub fn decay_constant(&self) -> Option<f64> {
        self.decay.map(|d| d.decay_constant)
    }

    /// Half-life and its unit, if known
    pub fn half_life(&self) -> Option<(f64, TimeUnit)> {
        self.decay.map(|d| (d.half_life, d.half_life_unit))
    }

    /// Builder style setter for the decay properties
    pub fn with_decay(mut self, decay: DecayInfo) -> Self {
        self.decay = Some(decay);
        self
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8} {} Bq", self.symbol, self.activity.sci(5, 2))
    }
}

/// Custom deserialiser normalising any symbol format
fn from_any_symbol<'de, D>(deserializer: D) -> core::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let symbol: String = Deserialize::deserialize(deserializer)?;
    normalise(&symbol).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_life_conversions() {
        let info = DecayInfo::from_half_life(2.0, TimeUnit::Hours);
        assert_eq!(info.half_life_seconds(), 7200.0);
        assert_eq!(info.decay_constant, LN_2 / 7200.0);
    }

    #[test]
    fn deserialise_normalises_symbol() {
        let nuclide: Nuclide = serde_json::from_str(r#"{"symbol":"cs137","activity":5.0}"#).unwrap();
        assert_eq!(nuclide.symbol(), "Cs-137");
        assert_eq!(nuclide.decay, None);

        let bad = serde_json::from_str::<Nuclide>(r#"{"symbol":"137","activity":5.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn metadata_accessors() {
        let info = DecayInfo::from_half_life(30.08, TimeUnit::Years);
        let nuclide = Nuclide::new("Cs-137", 1.0).unwrap().with_decay(info);
        assert_eq!(nuclide.decay_constant(), Some(info.decay_constant));
        assert_eq!(nuclide.half_life(), Some((30.08, TimeUnit::Years)));
    }

    #[test]
    fn display() {
        let nuclide = Nuclide::new("Co-60", 1000.0).unwrap();
        assert_eq!(nuclide.to_string(), "Co-60    1.00000e+03 Bq");
    }
}
