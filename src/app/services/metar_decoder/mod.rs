//! METAR/SPECI decoder
//!
//! A single forward pass over whitespace-delimited tokens. Each state
//! consumes at most one token (RVR, weather and cloud groups repeat), and the
//! first token no remaining state accepts ends the structured part of the
//! report. Everything after it is kept verbatim as supplementary data.
//!
//! ## Usage
//!
//! ```rust
//! use taf_verifier::app::services::metar_decoder::decode_metar;
//!
//! let report = decode_metar("METAR VECC 110800Z 20010KT 3000 HZ SCT015 BKN080 28/22 Q1008=")
//!     .expect("station present");
//! assert_eq!(report.station.as_deref(), Some("VECC"));
//! assert_eq!(report.qnh, Some(1008));
//! ```

pub mod decoder;

#[cfg(test)]
pub mod tests;

pub use decoder::MetarDecoder;

use crate::app::models::MetarReport;
use tracing::debug;

/// Decode one METAR or SPECI report
///
/// Returns `None` when no station group could be found, which includes empty
/// input. Malformed groups never cause a failure; they are skipped or kept as
/// supplementary tokens.
pub fn decode_metar(text: &str) -> Option<MetarReport> {
    let report = MetarDecoder::new(text).decode();
    if report.is_decoded() {
        Some(report)
    } else {
        debug!("Discarding METAR without a station group: '{}'", report.raw);
        None
    }
}
