//! Reading and writing reference decay data
//!
//! Tables can be read from a pair of CSV files, or a full table written out
//! previously as JSON or a compact binary.

// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

// external crates
use log::{debug, info};
use serde::de::DeserializeOwned;

// internal modules
use crate::error::{Error, Result};
use crate::table::{DecayRow, DecayTable, NuclideRow, TableRows};

/// Name of the nuclide table expected by [read_dir()]
pub const NUCLIDES_FILE: &str = "nuclides.csv";

/// Name of the decay table expected by [read_dir()]
pub const DECAYS_FILE: &str = "decays.csv";

/// Read reference data from a directory
///
/// The directory must contain [NUCLIDES_FILE] and [DECAYS_FILE]. See
/// [read_csv()] for the expected contents.
///
/// ```rust
/// # use ndecay_data::{read_dir, DecayData};
/// let table = read_dir("./data").unwrap();
/// assert!(table.decay_info("Co-60").is_some());
/// ```
pub fn read_dir<P: AsRef<Path>>(dir: P) -> Result<DecayTable> {
    let dir = dir.as_ref();
    let nuclides = dir.join(NUCLIDES_FILE);
    let decays = dir.join(DECAYS_FILE);

    for path in [&nuclides, &decays] {
        if !path.is_file() {
            return Err(Error::MissingDataFile(path.to_path_buf()));
        }
    }

    read_csv(nuclides, decays)
}

/// Read reference data from nuclide and decay CSV tables
///
/// Both files need a header row. Symbols may be in any reasonable format and
/// are normalised as the table is built.
///
/// The nuclide table has one row per tracked isotope:
///
/// ```text
/// symbol,lambda,half_life,unit
/// Sr-90,7.629215e-10,28.79,years
/// Y-90,3.008451e-06,64.0,hours
/// ```
///
/// The decay table has one row per parent and daughter pair:
///
/// ```text
/// symbol,daughter,branch_ratio
/// Sr-90,Y-90,1.0
/// ```
pub fn read_csv<P: AsRef<Path>, Q: AsRef<Path>>(nuclides: P, decays: Q) -> Result<DecayTable> {
    let rows = TableRows {
        nuclides: read_records::<NuclideRow>(nuclides.as_ref())?,
        decays: read_records::<DecayRow>(decays.as_ref())?,
    };

    info!(
        "Read {} nuclide and {} decay records",
        rows.nuclides.len(),
        rows.decays.len()
    );
    DecayTable::from_rows(rows)
}

/// Read a full table from JSON
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<DecayTable> {
    let reader = open(path.as_ref())?;
    Ok(serde_json::from_reader(reader)?)
}

/// Write a full table to JSON
///
/// Rows are sorted by symbol, so the same table always produces the same
/// file.
pub fn write_json<P: AsRef<Path>>(table: &DecayTable, path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}

/// Read a full table from a binary file written by [write_binary()]
pub fn read_binary<P: AsRef<Path>>(path: P) -> Result<DecayTable> {
    let reader = open(path.as_ref())?;
    Ok(bincode::deserialize_from(reader)?)
}

/// Write a full table to a compact binary file
///
/// Much faster to read back than CSV or JSON for large data sets.
pub fn write_binary<P: AsRef<Path>>(table: &DecayTable, path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    bincode::serialize_into(writer, table)?;
    Ok(())
}

/// Open a reference data file, keeping the path for any error
fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Deserialise every record of a CSV file with headers
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(open(path)?);

    let records = rdr.deserialize().collect::<csv::Result<Vec<T>>>()?;
    debug!("{} records in {}", records.len(), path.display());
    Ok(records)
}
