//! Integration tests for reading spectra from file

use ndecay_nuclide::{read_spectrum_csv, Error, Spectrum};
use rstest::{fixture, rstest};

#[fixture]
fn reference() -> Spectrum {
    read_spectrum_csv("./data/spectrum.csv").unwrap()
}

#[rstest]
fn repeated_symbols_are_merged(reference: Spectrum) {
    assert_eq!(reference.len(), 3);
    assert_eq!(reference.symbols(), vec!["Co-60", "Cs-137", "Sr-90"]);
}

#[rstest]
#[case("Co-60", 1500.0)] // case 1
#[case("Cs-137", 250.0)] // case 2
#[case("Sr-90", 40.0)] // case 3
fn activities_are_read(reference: Spectrum, #[case] symbol: &str, #[case] activity: f64) {
    assert_eq!(reference.activity(symbol), activity);
}

#[rstest]
fn json_matches_csv(reference: Spectrum) {
    let json = reference.to_json().unwrap();
    assert_eq!(Spectrum::from_json(&json).unwrap(), reference);
}

#[test]
fn invalid_symbols_are_reported() {
    let result = read_spectrum_csv("./data/bad_symbol.csv");
    assert!(matches!(result, Err(Error::InvalidSymbol { hint }) if hint == "137"));
}

#[test]
fn missing_file() {
    let result = read_spectrum_csv("./data/does_not_exist.csv");
    assert!(matches!(result, Err(Error::Io(_))));
}
