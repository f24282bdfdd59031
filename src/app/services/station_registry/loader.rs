//! Loading additional stations from JSON
//!
//! The file holds an array of `{"code", "name", "fir"}` records. Loaded
//! entries override built-in entries with the same code.

use super::StationRegistry;
use crate::app::models::StationInfo;
use crate::app::services::lexer;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct StationRecord {
    code: String,
    name: String,
    fir: String,
}

impl StationRegistry {
    /// Built-in stations extended with the contents of `path`
    pub fn load_with_file(path: &Path) -> Result<Self> {
        let mut registry = Self::builtin();
        registry.merge_file(path)?;
        Ok(registry)
    }

    /// Merge a JSON station file into this registry
    ///
    /// # Returns
    /// Number of stations read from the file
    ///
    /// # Errors
    /// * `Error::Io` if the file cannot be read
    /// * `Error::Json` if it is not a valid station array
    /// * `Error::StationRegistry` if a record has an invalid ICAO code
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        info!("Loading station table from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read station file {}", path.display()), e)
        })?;
        self.merge_json(&text)
    }

    /// Merge stations from JSON text
    pub fn merge_json(&mut self, text: &str) -> Result<usize> {
        let records: Vec<StationRecord> = serde_json::from_str(text)
            .map_err(|e| Error::json("Invalid station table", e))?;

        for record in &records {
            let code = record.code.trim().to_ascii_uppercase();
            if !lexer::is_station_token(&code) {
                return Err(Error::station_registry(format!(
                    "Invalid ICAO code '{}' in station table",
                    record.code
                )));
            }
        }

        let count = records.len();
        for record in records {
            let code = record.code.trim().to_ascii_uppercase();
            if self
                .insert(StationInfo::known(code.as_str(), record.name, record.fir))
                .is_some()
            {
                debug!("Station {} overrides an existing entry", code);
            }
        }

        info!(
            "Loaded {} stations ({} in registry)",
            count,
            self.station_count()
        );
        Ok(count)
    }
}
