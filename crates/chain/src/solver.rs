//! Recursive decay chain solver

// standard library
use std::collections::BTreeSet;

// external crates
use log::{debug, info, warn};
use rayon::prelude::*;

// ndecay modules
use ndecay_data::DecayData;
use ndecay_format::{f, NumFormat};
use ndecay_nuclide::{DecayInfo, DecayTime, Nuclide, Spectrum};

// internal modules
use crate::error::{Error, Result};
use crate::options::SolverOptions;
use crate::path::{ChainNode, DecayPath};

/// Result of decaying a spectrum
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Time the spectrum was decayed for
    pub time: DecayTime,
    /// Every nuclide reached, with activities summed over all decay paths
    pub spectrum: Spectrum,
    /// Sorted symbols with no reference data, treated as ends of chains
    pub unknown: Vec<String>,
}

impl Solution {
    /// Activity of a nuclide by canonical symbol, zero if never reached
    pub fn activity(&self, symbol: &str) -> f64 {
        self.spectrum.activity(symbol)
    }

    /// Check that reference data were found for every nuclide reached
    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("Decay time: {}\n{}", self.time, self.spectrum);
        if !self.is_complete() {
            s += &f!("\nNo reference data: {}", self.unknown.join(", "));
        }
        write!(f, "{s}")
    }
}

/// Decay chain solver using the generalised Bateman equations
///
/// For every parent nuclide in a [Spectrum], the solver walks each decay
/// path reachable through the reference data depth first. Every nuclide on a
/// path gets the closed-form Bateman activity for that linear path, and
/// contributions to the same nuclide from different paths and different
/// parents are summed.
///
/// The reference data are borrowed read-only, so one table can be shared by
/// any number of solvers and threads.
///
/// ```rust
/// # use ndecay_chain::DecaySolver;
/// # use ndecay_data::DecayTable;
/// # use ndecay_nuclide::{DecayInfo, DecayTime, Spectrum, TimeUnit};
/// let mut table = DecayTable::new();
/// table.insert_nuclide("Sr-90", DecayInfo::from_half_life(28.79, TimeUnit::Years)).unwrap();
/// table.insert_nuclide("Y-90", DecayInfo::from_half_life(64.0, TimeUnit::Hours)).unwrap();
/// table.insert_branch("Sr-90", "Y-90", 1.0).unwrap();
///
/// let mut input = Spectrum::new();
/// input.add_activity("sr90", 1000.0).unwrap();
///
/// // decay for 30 days, long enough for Y-90 to catch up with Sr-90
/// let solution = DecaySolver::new(&table)
///     .compute(&input, DecayTime::new(30, TimeUnit::Days))
///     .unwrap();
///
/// let ratio = solution.activity("Y-90") / solution.activity("Sr-90");
/// assert!((ratio - 1.0).abs() < 1.0e-3);
/// ```
#[derive(Debug)]
pub struct DecaySolver<'a, D: DecayData + ?Sized> {
    data: &'a D,
    options: SolverOptions,
}

impl<'a, D: DecayData + ?Sized> DecaySolver<'a, D> {
    /// New solver with default options
    pub fn new(data: &'a D) -> Self {
        Self::with_options(data, SolverOptions::default())
    }

    /// New solver with explicit options
    pub fn with_options(data: &'a D, options: SolverOptions) -> Self {
        Self { data, options }
    }

    /// Options used by this solver
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Decay every nuclide in `input` for `time`
    ///
    /// The input is never modified and a new output spectrum is built for
    /// every call.
    ///
    /// Nuclides without reference data, whether parents or daughters, end
    /// their chain without contributing and are listed in
    /// [Solution::unknown]. An empty input is an error rather than an empty
    /// solution, see [Error::EmptySpectrum].
    pub fn compute(&self, input: &Spectrum, time: DecayTime) -> Result<Solution> {
        if input.is_empty() {
            return Err(Error::EmptySpectrum);
        }

        let seconds = time.to_seconds()? as f64;
        info!("Decaying {} nuclides for {time}", input.len());

        let mut tally = Tally::default();
        for parent in input {
            let Some(info) = self.lookup(parent.symbol(), &mut tally.unknown) else {
                continue;
            };

            let mut path = DecayPath::new(ChainNode::root(parent.symbol(), info.decay_constant));
            self.walk(&mut path, parent.activity, seconds, &mut tally)?;
        }

        debug!(
            "{} nuclides in decayed spectrum, {} unknown",
            tally.spectrum.len(),
            tally.unknown.len()
        );

        Ok(Solution {
            time,
            spectrum: tally.spectrum,
            unknown: tally.unknown.into_iter().collect(),
        })
    }

    /// Evaluate the last node on the path, then every path below it
    ///
    /// `activity` is always the activity of the root nuclide. All scaling
    /// down the chain happens through the branching ratios on the path.
    fn walk(&self, path: &mut DecayPath, activity: f64, t: f64, tally: &mut Tally) -> Result<()> {
        let Some(node) = path.last() else {
            return Ok(());
        };
        let symbol = node.symbol.clone();

        if path.depth() > self.options.max_depth {
            return Err(Error::ChainTooDeep {
                symbol,
                max_depth: self.options.max_depth,
            });
        }

        let contribution = path.activity(activity, t);
        debug!(
            "{:indent$}{symbol} (λ={}, b={}) {} Bq",
            "",
            node.decay_constant.sci(4, 2),
            node.branch_ratio,
            contribution.sci(5, 2),
            indent = 2 * path.depth()
        );

        if !contribution.is_finite() {
            warn!("Activity of {contribution} along {path}");
        }
        tally.merge(self.data, &symbol, contribution)?;

        for branch in self.data.daughters(&symbol) {
            let Some(info) = self.lookup(&branch.daughter, &mut tally.unknown) else {
                continue;
            };

            path.push(ChainNode::new(
                &branch.daughter,
                info.decay_constant,
                branch.branch_ratio,
            ));
            let result = self.walk(path, activity, t, tally);
            path.pop();
            result?;
        }

        Ok(())
    }

    /// Decay properties for a symbol, noting any that are unknown
    fn lookup(&self, symbol: &str, unknown: &mut BTreeSet<String>) -> Option<DecayInfo> {
        let info = self.data.decay_info(symbol);
        if info.is_none() && unknown.insert(symbol.to_string()) {
            warn!("No reference data for {symbol}, treated as the end of the chain");
        }
        info
    }
}

impl<'a, D: DecayData + Sync + ?Sized> DecaySolver<'a, D> {
    /// Decay the same spectrum for several times in parallel
    ///
    /// Solutions are returned in the same order as `times`. The first error
    /// encountered is returned instead if any calculation fails.
    pub fn compute_series(&self, input: &Spectrum, times: &[DecayTime]) -> Result<Vec<Solution>> {
        times
            .par_iter()
            .map(|&time| self.compute(input, time))
            .collect()
    }

    /// Decay several independent spectra in parallel
    ///
    /// Results are returned in the same order as `inputs`, and a failure for
    /// one spectrum does not affect the others.
    pub fn compute_batch(&self, inputs: &[Spectrum], time: DecayTime) -> Vec<Result<Solution>> {
        inputs
            .par_iter()
            .map(|input| self.compute(input, time))
            .collect()
    }
}

/// Decay a spectrum with default solver options
///
/// Convenience for when only the decayed spectrum is needed. Use
/// [DecaySolver] directly to find out which nuclides had no reference data.
///
/// ```rust
/// # use ndecay_chain::compute_spectrum;
/// # use ndecay_data::DecayTable;
/// # use ndecay_nuclide::{DecayInfo, DecayTime, Spectrum, TimeUnit};
/// let mut table = DecayTable::new();
/// table.insert_nuclide("Co-60", DecayInfo::from_half_life(5.2714, TimeUnit::Years)).unwrap();
///
/// let mut input = Spectrum::new();
/// input.add_activity("Co-60", 1000.0).unwrap();
///
/// let output = compute_spectrum(&input, DecayTime::new(0, TimeUnit::Days), &table).unwrap();
/// assert!((output.activity("Co-60") - 1000.0).abs() < 1.0e-9);
/// ```
pub fn compute_spectrum<D: DecayData + ?Sized>(
    input: &Spectrum,
    time: DecayTime,
    data: &D,
) -> Result<Spectrum> {
    Ok(DecaySolver::new(data).compute(input, time)?.spectrum)
}

/// Output accumulated over every decay path of a calculation
#[derive(Debug, Default)]
struct Tally {
    spectrum: Spectrum,
    unknown: BTreeSet<String>,
}

impl Tally {
    /// Add a path contribution, creating the nuclide on first sight
    fn merge<D: DecayData + ?Sized>(&mut self, data: &D, symbol: &str, activity: f64) -> Result<()> {
        if let Some(existing) = self.spectrum.get_mut(symbol) {
            existing.activity += activity;
            return Ok(());
        }

        let mut nuclide = Nuclide::new(symbol, activity)?;
        data.describe(&mut nuclide);
        self.spectrum.add(nuclide);
        Ok(())
    }
}
