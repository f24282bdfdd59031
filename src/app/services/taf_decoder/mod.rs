//! TAF decoder
//!
//! The header is read like a METAR header. The body loop then keeps a
//! "current segment" index that starts at the base forecast and moves only
//! when a change keyword (`FM`, `BECMG`, `TEMPO`, `PROBnn`) opens a new
//! segment. Field groups always attach to the current segment, and segments
//! are stored in textual order.
//!
//! ## Usage
//!
//! ```rust
//! use taf_verifier::app::services::taf_decoder::decode_taf;
//!
//! let taf = decode_taf(
//!     "TAF VECC 110500Z 1106/1212 19008KT 3500 HZ SCT018 BKN100 \
//!      TEMPO 1108/1112 2000 TSRA SCT015 FEW025CB OVC090=",
//! )
//! .expect("station present");
//! assert_eq!(taf.changes.len(), 1);
//! assert_eq!(taf.validity_hours(), Some(30));
//! ```

pub mod decoder;

#[cfg(test)]
pub mod tests;

pub use decoder::TafDecoder;

use crate::app::models::TafReport;
use tracing::debug;

/// Decode one TAF
///
/// Returns `None` when no station group could be found.
pub fn decode_taf(text: &str) -> Option<TafReport> {
    let report = TafDecoder::new(text).decode();
    if report.is_decoded() {
        Some(report)
    } else {
        debug!("Discarding TAF without a station group: '{}'", report.raw);
        None
    }
}
