//! In-memory reference decay data

// standard library
use std::collections::HashMap;

// external crates
use log::{debug, warn};
use serde::{Deserialize, Serialize};

// ndecay modules
use ndecay_format::{f, NumFormat};
use ndecay_nuclide::{normalise, DecayInfo, TimeUnit};

// internal modules
use crate::error::{Error, Result};
use crate::provider::{Branch, DecayData};

/// Allowed excess on the sum of branching ratios before it is flagged
const BRANCH_SUM_TOLERANCE: f64 = 1.0e-6;

/// Row of the nuclide table
///
/// One row per tracked isotope, with the decay constant in 1/s and the
/// half-life in whatever unit suits the nuclide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclideRow {
    /// Isotope symbol, any reasonable format
    pub symbol: String,
    /// Decay constant λ (1/s)
    pub lambda: f64,
    /// Half-life in units of `unit`
    pub half_life: f64,
    /// Unit of the half-life
    pub unit: TimeUnit,
}

/// Row of the decay table
///
/// Zero or more rows per parent, one for each daughter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayRow {
    /// Parent isotope symbol, any reasonable format
    pub symbol: String,
    /// Daughter isotope symbol, any reasonable format
    pub daughter: String,
    /// Fraction of parent decays producing the daughter
    pub branch_ratio: f64,
}

/// Plain tabular form of a [DecayTable]
///
/// This is the shape every loader works with, and the form used for
/// serialisation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRows {
    /// Nuclide table rows
    pub nuclides: Vec<NuclideRow>,
    /// Decay table rows
    pub decays: Vec<DecayRow>,
}

/// Reference decay data indexed by canonical symbol
///
/// Two tables are held in hash maps built once when the data are loaded:
///
/// - nuclides, mapping a symbol to its [DecayInfo]
/// - decays, mapping a parent symbol to its ordered list of [Branch]es
///
/// Every symbol is normalised on the way in, so lookups must use the
/// canonical `<Element>-<MassNumber>[m]` form.
///
/// ```rust
/// # use ndecay_data::{DecayData, DecayTable};
/// # use ndecay_nuclide::{DecayInfo, TimeUnit};
/// let mut table = DecayTable::new();
/// table.insert_nuclide("sr90", DecayInfo::from_half_life(28.79, TimeUnit::Years)).unwrap();
/// table.insert_nuclide("y90", DecayInfo::from_half_life(64.0, TimeUnit::Hours)).unwrap();
/// table.insert_branch("sr90", "y90", 1.0).unwrap();
///
/// assert_eq!(table.nuclide_count(), 2);
/// assert_eq!(table.daughters("Sr-90")[0].daughter, "Y-90");
/// assert!(table.daughters("Y-90").is_empty());
/// assert!(table.decay_info("Zr-90").is_none());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRows", into = "TableRows")]
pub struct DecayTable {
    nuclides: HashMap<String, DecayInfo>,
    decays: HashMap<String, Vec<Branch>>,
}

impl DecayTable {
    /// New empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from plain rows
    ///
    /// Any suspicious data are logged as warnings, see [DecayTable::check()].
    pub fn from_rows(rows: TableRows) -> Result<Self> {
        let mut table = Self::new();

        for row in rows.nuclides {
            let info = DecayInfo {
                decay_constant: row.lambda,
                half_life: row.half_life,
                half_life_unit: row.unit,
            };
            table.insert_nuclide(&row.symbol, info)?;
        }

        for row in rows.decays {
            table.insert_branch(&row.symbol, &row.daughter, row.branch_ratio)?;
        }

        for issue in table.check() {
            warn!("{issue}");
        }

        debug!(
            "Decay table built with {} nuclides and {} decay routes",
            table.nuclide_count(),
            table.branch_count()
        );
        Ok(table)
    }

    /// Plain rows in a consistent order, sorted by parent symbol
    pub fn rows(&self) -> TableRows {
        let nuclides = self
            .symbols()
            .into_iter()
            .map(|symbol| {
                let info = &self.nuclides[symbol];
                NuclideRow {
                    symbol: symbol.to_string(),
                    lambda: info.decay_constant,
                    half_life: info.half_life,
                    unit: info.half_life_unit,
                }
            })
            .collect();

        let mut parents: Vec<&String> = self.decays.keys().collect();
        parents.sort();

        let decays = parents
            .into_iter()
            .flat_map(|parent| {
                self.decays[parent].iter().map(move |branch| DecayRow {
                    symbol: parent.clone(),
                    daughter: branch.daughter.clone(),
                    branch_ratio: branch.branch_ratio,
                })
            })
            .collect();

        TableRows { nuclides, decays }
    }

    /// Add or replace the decay properties of a nuclide
    pub fn insert_nuclide(&mut self, symbol: &str, info: DecayInfo) -> Result<()> {
        let symbol = normalise(symbol)?;
        if self.nuclides.insert(symbol.clone(), info).is_some() {
            warn!("Duplicate nuclide entry for {symbol}, keeping the last");
        }
        Ok(())
    }

    /// Add a decay route from a parent to a daughter
    ///
    /// Routes are kept in insertion order for each parent.
    pub fn insert_branch(&mut self, parent: &str, daughter: &str, branch_ratio: f64) -> Result<()> {
        let parent = normalise(parent)?;
        let daughter = normalise(daughter)?;
        self.decays.entry(parent).or_default().push(Branch {
            daughter,
            branch_ratio,
        });
        Ok(())
    }

    /// Number of tracked nuclides
    pub fn nuclide_count(&self) -> usize {
        self.nuclides.len()
    }

    /// Total number of decay routes
    pub fn branch_count(&self) -> usize {
        self.decays.values().map(Vec::len).sum()
    }

    /// Check for an empty nuclide table
    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }

    /// Check if a canonical symbol is tracked
    pub fn contains(&self, symbol: &str) -> bool {
        self.nuclides.contains_key(symbol)
    }

    /// Sorted list of every tracked symbol
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.nuclides.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Descriptions of any physically suspicious data
    ///
    /// Flags decay constants that are not positive and finite, branching
    /// ratios outside of `[0, 1]`, and parents with ratios summing to more
    /// than one. None of these stop a calculation.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for symbol in self.symbols() {
            let lambda = self.nuclides[symbol].decay_constant;
            if !(lambda.is_finite() && lambda > 0.0) {
                issues.push(f!("{symbol} has decay constant {lambda}"));
            }
        }

        let mut parents: Vec<&String> = self.decays.keys().collect();
        parents.sort();

        for parent in parents {
            let branches = &self.decays[parent];
            for b in branches {
                if !(0.0..=1.0).contains(&b.branch_ratio) {
                    issues.push(f!(
                        "{parent} -> {} has branching ratio {}",
                        b.daughter,
                        b.branch_ratio
                    ));
                }
            }

            let total: f64 = branches.iter().map(|b| b.branch_ratio).sum();
            if total > 1.0 + BRANCH_SUM_TOLERANCE {
                issues.push(f!("{parent} branching ratios sum to {}", total.sci(5, 2)));
            }
        }

        issues
    }
}

impl DecayData for DecayTable {
    fn decay_info(&self, symbol: &str) -> Option<DecayInfo> {
        self.nuclides.get(symbol).copied()
    }

    fn daughters(&self, symbol: &str) -> &[Branch] {
        self.decays.get(symbol).map(Vec::as_slice).unwrap_or_default()
    }
}

impl TryFrom<TableRows> for DecayTable {
    type Error = Error;

    fn try_from(rows: TableRows) -> Result<Self> {
        DecayTable::from_rows(rows)
    }
}

impl From<DecayTable> for TableRows {
    fn from(table: DecayTable) -> Self {
        table.rows()
    }
}
