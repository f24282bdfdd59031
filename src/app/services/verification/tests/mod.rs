//! Shared fixtures for verification tests

use crate::app::models::{MetarReport, ReportTime, TafReport};
use crate::app::services::metar_decoder::decode_metar;
use crate::app::services::taf_decoder::decode_taf;

pub mod comparator_tests;
pub mod resolver_tests;
pub mod selection_tests;
pub mod verifier_tests;

pub const KOLKATA_TAF: &str = "TAF VECC 110500Z 1106/1212 19008KT 3500 HZ SCT018 BKN100 \
                               TEMPO 1108/1112 2000 TSRA SCT015 FEW025CB OVC090=";

pub fn taf(text: &str) -> TafReport {
    decode_taf(text).unwrap()
}

pub fn metar(text: &str) -> MetarReport {
    decode_metar(text).unwrap()
}

pub fn time(day: u8, hour: u8, minute: u8) -> ReportTime {
    ReportTime::new(day, hour, minute).unwrap()
}
