//! Station registry for ICAO code lookups
//!
//! The registry starts from the built-in station table and can be extended
//! from a JSON file. Lookups never fail: unknown codes resolve to a
//! placeholder [`StationInfo`] with `known = false`.

use crate::app::models::StationInfo;
use crate::constants::BUILTIN_STATIONS;
use std::collections::HashMap;

pub mod loader;

#[cfg(test)]
pub mod tests;

/// Station registry providing O(1) lookups by ICAO code
#[derive(Debug, Clone, PartialEq)]
pub struct StationRegistry {
    /// Station metadata indexed by upper-case ICAO code
    pub(crate) stations: HashMap<String, StationInfo>,
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            stations: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in station table
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (code, name, fir) in BUILTIN_STATIONS {
            registry.insert(StationInfo::known(*code, *name, *fir));
        }
        registry
    }

    /// Add or replace a station, returning the previous entry
    pub fn insert(&mut self, station: StationInfo) -> Option<StationInfo> {
        let code = station.code.to_ascii_uppercase();
        self.stations.insert(
            code.clone(),
            StationInfo {
                code,
                known: true,
                ..station
            },
        )
    }

    /// Get station metadata by ICAO code (case-insensitive)
    pub fn get_station(&self, code: &str) -> Option<&StationInfo> {
        self.stations.get(&code.to_ascii_uppercase())
    }

    /// Look up a station, falling back to the unknown-station placeholder
    pub fn station_info(&self, code: &str) -> StationInfo {
        self.get_station(code)
            .cloned()
            .unwrap_or_else(|| StationInfo::unknown(code.to_ascii_uppercase()))
    }

    pub fn contains_station(&self, code: &str) -> bool {
        self.get_station(code).is_some()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// All stations ordered by code
    pub fn stations(&self) -> Vec<&StationInfo> {
        let mut stations: Vec<&StationInfo> = self.stations.values().collect();
        stations.sort_by(|a, b| a.code.cmp(&b.code));
        stations
    }

    /// Stations in a flight information region (case-insensitive)
    pub fn find_stations_by_fir(&self, fir: &str) -> Vec<&StationInfo> {
        let fir_lower = fir.to_lowercase();
        self.stations()
            .into_iter()
            .filter(|station| station.fir.to_lowercase() == fir_lower)
            .collect()
    }
}
