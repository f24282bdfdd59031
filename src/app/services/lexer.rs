//! Token classification for METAR and TAF text
//!
//! Stateless predicates over a single whitespace-delimited token. The
//! decoders use these to decide which state a token belongs to.

use crate::constants::{CAVOK, NSW};
use regex::Regex;
use std::sync::LazyLock;

static WIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3}|VRB|///)(\d{2,3}|//)(?:G(\d{2,3}))?KT$").expect("wind pattern")
});

static WIND_VARIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})V(\d{3})$").expect("wind variation pattern"));

static VISIBILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(?:NDV)?$").expect("visibility pattern"));

static WEATHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+-]?(?:VC)?(?:MI|BC|PR|DR|BL|SH|TS|FZ)?(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PO|SQ|FC|SS|DS)+$",
    )
    .expect("weather pattern")
});

static BARE_DESCRIPTOR_WEATHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:VC)?(?:TS|SH)$").expect("bare weather pattern"));

static CLOUD_LAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(FEW|SCT|BKN|OVC)(\d{3}|///)(CB|TCU|///)?$").expect("cloud pattern")
});

static VERTICAL_VISIBILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^VV(\d{3}|///)$").expect("vertical visibility pattern"));

static RVR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^R\d{2}[LCR]?/\S+$").expect("rvr pattern"));

static TEMPERATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(M?\d{2})/(M?\d{2})?$").expect("temperature pattern"));

static PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([QA])(\d{4})$").expect("pressure pattern"));

/// Change group keyword in a TAF body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKeyword {
    /// `FM` followed by a separate time token
    From,
    /// `FMddhhmm` in a single token
    FromWithTime,
    Becoming,
    Temporary,
    Probability(u8),
    NoSignificantChange,
}

fn all_digits(token: &str, len: usize) -> bool {
    token.len() == len && token.bytes().all(|b| b.is_ascii_digit())
}

/// 12-digit `yyyymmddhhmm` timestamp that bulletin files put before a report
pub fn is_bulletin_prefix(token: &str) -> bool {
    all_digits(token, 12)
}

pub fn is_station_token(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_uppercase())
}

pub fn is_time_token(token: &str) -> bool {
    token.len() == 7 && token.ends_with('Z') && all_digits(&token[..6], 6)
}

pub fn is_validity_token(token: &str) -> bool {
    match token.split_once('/') {
        Some((from, to)) => all_digits(from, 4) && all_digits(to, 4),
        None => false,
    }
}

/// `ddhh` or `ddhhmm` following a bare `FM`
pub fn is_from_time_token(token: &str) -> bool {
    all_digits(token, 4) || all_digits(token, 6)
}

pub fn is_wind_token(token: &str) -> bool {
    token == "CALM" || WIND.is_match(token)
}

pub fn is_wind_variation_token(token: &str) -> bool {
    WIND_VARIATION.is_match(token)
}

pub fn is_visibility_token(token: &str) -> bool {
    VISIBILITY.is_match(token)
}

pub fn is_weather_token(token: &str) -> bool {
    token == NSW || WEATHER.is_match(token) || BARE_DESCRIPTOR_WEATHER.is_match(token)
}

pub fn is_cloud_token(token: &str) -> bool {
    matches!(token, "NSC" | "SKC" | "CLR" | "NCD" | CAVOK)
        || CLOUD_LAYER.is_match(token)
        || VERTICAL_VISIBILITY.is_match(token)
}

pub fn is_rvr_token(token: &str) -> bool {
    RVR.is_match(token)
}

pub fn is_temperature_token(token: &str) -> bool {
    TEMPERATURE.is_match(token)
}

pub fn is_pressure_token(token: &str) -> bool {
    PRESSURE.is_match(token)
}

pub fn classify_change_keyword(token: &str) -> Option<ChangeKeyword> {
    match token {
        "FM" => Some(ChangeKeyword::From),
        "BECMG" => Some(ChangeKeyword::Becoming),
        "TEMPO" => Some(ChangeKeyword::Temporary),
        "PROB30" => Some(ChangeKeyword::Probability(30)),
        "PROB40" => Some(ChangeKeyword::Probability(40)),
        "NOSIG" => Some(ChangeKeyword::NoSignificantChange),
        _ if token.starts_with("FM") && all_digits(&token[2..], 6) => {
            Some(ChangeKeyword::FromWithTime)
        }
        _ => None,
    }
}

pub fn is_change_keyword(token: &str) -> bool {
    classify_change_keyword(token).is_some()
}

// Capture accessors for the field decoders

pub(crate) fn wind_captures(token: &str) -> Option<regex::Captures<'_>> {
    WIND.captures(token)
}

pub(crate) fn wind_variation_captures(token: &str) -> Option<regex::Captures<'_>> {
    WIND_VARIATION.captures(token)
}

pub(crate) fn visibility_captures(token: &str) -> Option<regex::Captures<'_>> {
    VISIBILITY.captures(token)
}

pub(crate) fn cloud_layer_captures(token: &str) -> Option<regex::Captures<'_>> {
    CLOUD_LAYER.captures(token)
}

pub(crate) fn vertical_visibility_captures(token: &str) -> Option<regex::Captures<'_>> {
    VERTICAL_VISIBILITY.captures(token)
}

pub(crate) fn temperature_captures(token: &str) -> Option<regex::Captures<'_>> {
    TEMPERATURE.captures(token)
}

pub(crate) fn pressure_captures(token: &str) -> Option<regex::Captures<'_>> {
    PRESSURE.captures(token)
}
