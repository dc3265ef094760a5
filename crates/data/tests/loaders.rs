//! Integration tests for reading and writing reference data

use ndecay_data::{
    read_binary, read_csv, read_dir, read_json, write_binary, write_json, DecayData, DecayTable,
    Error,
};
use ndecay_nuclide::TimeUnit;
use rstest::{fixture, rstest};

use std::path::PathBuf;

#[fixture]
fn reference() -> DecayTable {
    read_dir("./data").unwrap()
}

/// Unique scratch file for anything written out during the tests
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ndecay-data-{}-{name}", std::process::id()))
}

#[rstest]
fn table_sizes(reference: DecayTable) {
    assert_eq!(reference.nuclide_count(), 9);
    assert_eq!(reference.branch_count(), 5);
    assert!(reference.check().is_empty());
}

#[rstest]
#[case("Co-60", 4.166732e-09, 5.2714, TimeUnit::Years)] // case 1
#[case("Y-90", 3.008451e-06, 64.0, TimeUnit::Hours)] // case 2
#[case("Ba-137m", 4.526823e-03, 2.552, TimeUnit::Minutes)] // case 3
#[case("Tc-99", 1.040479e-13, 2.111e5, TimeUnit::Years)] // case 4
fn nuclide_rows(
    reference: DecayTable,
    #[case] symbol: &str,
    #[case] lambda: f64,
    #[case] half_life: f64,
    #[case] unit: TimeUnit,
) {
    let info = reference.decay_info(symbol).unwrap();
    assert_eq!(info.decay_constant, lambda);
    assert_eq!(info.half_life, half_life);
    assert_eq!(info.half_life_unit, unit);
}

#[rstest]
fn decay_rows(reference: DecayTable) {
    let molybdenum = reference.daughters("Mo-99");
    assert_eq!(molybdenum.len(), 2);
    assert_eq!(molybdenum[0].daughter, "Tc-99m");
    assert_eq!(molybdenum[0].branch_ratio, 0.876);
    assert_eq!(molybdenum[1].daughter, "Tc-99");
    assert_eq!(molybdenum[1].branch_ratio, 0.124);

    assert!(reference.daughters("Co-60").is_empty());
}

#[rstest]
fn read_dir_matches_read_csv(reference: DecayTable) {
    let table = read_csv("./data/nuclides.csv", "./data/decays.csv").unwrap();
    assert_eq!(table, reference);
}

#[test]
fn missing_data_file() {
    let result = read_dir("./data/incomplete");
    assert!(matches!(
        result,
        Err(Error::MissingDataFile(path)) if path.ends_with("decays.csv")
    ));
}

#[test]
fn unavailable_file_keeps_path() {
    let result = read_csv("./data/nope.csv", "./data/decays.csv");
    assert!(matches!(
        result,
        Err(Error::Unavailable { path, .. }) if path.ends_with("nope.csv")
    ));
}

#[test]
fn malformed_unit() {
    let result = read_csv("./data/malformed.csv", "./data/decays.csv");
    assert!(matches!(result, Err(Error::Csv(_))));
}

#[rstest]
fn json_round_trip(reference: DecayTable) {
    let path = scratch("table.json");
    write_json(&reference, &path).unwrap();
    let table = read_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(table, reference);
}

#[rstest]
fn binary_round_trip(reference: DecayTable) {
    let path = scratch("table.bin");
    write_binary(&reference, &path).unwrap();
    let table = read_binary(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(table, reference);
}

#[rstest]
fn json_is_deterministic(reference: DecayTable) {
    let first = serde_json::to_string(&reference).unwrap();
    let second = serde_json::to_string(&reference.clone()).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(r#"{"nuclides":[{"symbol":"Ba-137m""#));
}
