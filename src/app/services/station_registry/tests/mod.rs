//! Shared test utilities and fixtures for station registry tests

use std::fs;
use std::path::{Path, PathBuf};

pub mod query_tests;

/// Write a JSON station table into `dir`
pub fn create_test_station_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

pub const EXTRA_STATIONS_JSON: &str = r#"[
    {"code": "VOBL", "name": "Bengaluru (KIA)", "fir": "Chennai FIR"},
    {"code": "vecc", "name": "Kolkata", "fir": "Kolkata FIR"}
]"#;
