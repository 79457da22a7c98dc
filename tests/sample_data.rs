//! The bundled sample inputs load, validate and run

use rental_roi::inputs::{load_scenarios, load_state};
use rental_roi::scenario::run_batch;
use rental_roi::calculate_roi;
use std::path::PathBuf;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_sample_state_loads() {
    let state = load_state(data_path("sample_state.json")).expect("Failed to load sample state");
    assert_eq!(state.loan_details.loan_amount, 240_000.0);
    assert_eq!(state.settings.analysis_years, 5);

    let metrics = calculate_roi(&state);
    assert_eq!(metrics.year(5), metrics.final_year());
    assert!(metrics.year(0).is_none());
    assert!(metrics.year(6).is_none());
}

#[test]
fn test_sample_scenarios_run() {
    let scenarios = load_scenarios(data_path("sample_scenarios.csv")).expect("Failed to load scenarios");
    assert_eq!(scenarios.len(), 3);
    assert_eq!(scenarios[1].name, "Condo");
    assert_eq!(scenarios[1].state.loan_details.loan_amount, 150_000.0);

    let results = run_batch(&scenarios);
    let horizons: Vec<usize> = results.iter().map(|r| r.metrics.yearly_projections.len()).collect();
    assert_eq!(horizons, vec![5, 10, 30]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_state(data_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, rental_roi::InputError::Io(_)));
}
