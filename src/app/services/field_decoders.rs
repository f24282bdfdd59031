//! Field decoders for individual METAR/TAF groups
//!
//! Each decoder converts one recognized token into a typed value. Decoders
//! never panic; sub-fields that cannot be read become `None` (or
//! `Wind::Unparsed`) instead.

use super::lexer;
use crate::app::models::{
    CloudCoverage, CloudLayer, ConvectiveType, Descriptor, Intensity, Phenomenon, Visibility,
    WeatherGroup, WeatherPhenomenon, Wind,
};
use crate::constants::{CAVOK, NSW, cloud, visibility};
use tracing::debug;

const INHG_TO_HPA: f64 = 33.8639;

/// Decode a surface wind group
///
/// `00000KT` and `CALM` are calm, a `VRB` direction is variable, and
/// anything with an unreadable direction or speed is kept as `Unparsed`.
pub fn decode_wind(token: &str) -> Wind {
    if token == "CALM" || token == "00000KT" {
        return Wind::Calm;
    }

    let Some(caps) = lexer::wind_captures(token) else {
        return Wind::Unparsed {
            raw: token.to_string(),
        };
    };

    let unparsed = || Wind::Unparsed {
        raw: token.to_string(),
    };
    let Some(speed) = caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok()) else {
        return unparsed();
    };
    let gust = caps
        .get(3)
        .and_then(|m| m.as_str().parse::<u16>().ok())
        .filter(|gust| {
            let valid = *gust > speed;
            if !valid {
                debug!("Dropping gust {} not above mean speed {} in {}", gust, speed, token);
            }
            valid
        });

    match caps.get(1).map(|m| m.as_str()) {
        Some("VRB") => Wind::Variable { speed, gust },
        Some(direction) => match direction.parse::<u16>() {
            Ok(0) if speed == 0 && gust.is_none() => Wind::Calm,
            Ok(direction) if direction <= 360 => Wind::Directional {
                direction,
                speed,
                gust,
            },
            _ => unparsed(),
        },
        None => unparsed(),
    }
}

/// Decode a `dddVddd` variable direction group
pub fn decode_wind_variation(token: &str) -> Option<(u16, u16)> {
    let caps = lexer::wind_variation_captures(token)?;
    let from = caps.get(1)?.as_str().parse::<u16>().ok()?;
    let to = caps.get(2)?.as_str().parse::<u16>().ok()?;
    (from <= 360 && to <= 360).then_some((from, to))
}

/// Decode a four-digit visibility group; `9999` means 10 km or more
pub fn decode_visibility(token: &str) -> Option<Visibility> {
    let caps = lexer::visibility_captures(token)?;
    let meters = caps.get(1)?.as_str().parse::<u32>().ok()?;
    if meters == 9999 {
        Some(Visibility::cavok())
    } else {
        Some(Visibility::new(meters))
    }
}

fn decode_height(field: &str) -> Option<u32> {
    field
        .parse::<u32>()
        .ok()
        .map(|hundreds| hundreds * cloud::HEIGHT_UNIT_FT)
}

/// Decode a cloud group, including the `NSC`/`SKC`/`CAVOK` literals
pub fn decode_cloud(token: &str) -> Option<CloudLayer> {
    match token {
        "SKC" | "CLR" | CAVOK => return Some(CloudLayer::Clear),
        "NSC" | "NCD" => return Some(CloudLayer::NoSignificantCloud),
        _ => {}
    }

    if let Some(caps) = lexer::vertical_visibility_captures(token) {
        return Some(CloudLayer::VerticalVisibility {
            height_feet: caps.get(1).and_then(|m| decode_height(m.as_str())),
        });
    }

    let caps = lexer::cloud_layer_captures(token)?;
    let coverage = CloudCoverage::from_code(caps.get(1)?.as_str())?;
    let height_feet = caps.get(2).and_then(|m| decode_height(m.as_str()));
    let convective = match caps.get(3).map(|m| m.as_str()) {
        Some("CB") => ConvectiveType::Cumulonimbus,
        Some("TCU") => ConvectiveType::ToweringCumulus,
        _ => ConvectiveType::None,
    };

    Some(CloudLayer::Layer {
        coverage,
        height_feet,
        convective,
    })
}

/// Decode a present-weather group
///
/// Descriptor codes are collected in order of appearance, followed by the
/// phenomenon codes. `NSW` yields the no-significant-weather sentinel.
pub fn decode_weather(token: &str) -> Option<WeatherPhenomenon> {
    if token == NSW {
        return Some(WeatherPhenomenon::NoSignificantWeather);
    }
    if !lexer::is_weather_token(token) {
        return None;
    }

    let (intensity, body) = if let Some(rest) = token.strip_prefix('+') {
        (Intensity::Heavy, rest)
    } else if let Some(rest) = token.strip_prefix('-') {
        (Intensity::Light, rest)
    } else {
        (Intensity::Moderate, token)
    };

    let mut descriptors = Vec::new();
    let mut phenomena = Vec::new();
    let mut index = 0;
    while let Some(code) = body.get(index..index + 2) {
        if let Some(descriptor) = Descriptor::from_code(code) {
            descriptors.push(descriptor);
        } else if let Some(phenomenon) = Phenomenon::from_code(code) {
            if !phenomena.contains(&phenomenon) {
                phenomena.push(phenomenon);
            }
        }
        index += 2;
    }

    if descriptors.is_empty() && phenomena.is_empty() {
        return None;
    }

    Some(WeatherPhenomenon::Group(WeatherGroup {
        intensity,
        descriptors,
        phenomena,
    }))
}

/// Decode a `TT/DD` group; `M` marks negative values and the dewpoint may be omitted
pub fn decode_temperature(token: &str) -> Option<(i8, Option<i8>)> {
    fn signed(field: &str) -> Option<i8> {
        match field.strip_prefix('M') {
            Some(digits) => digits.parse::<i8>().ok().map(|v| -v),
            None => field.parse::<i8>().ok(),
        }
    }

    let caps = lexer::temperature_captures(token)?;
    let temperature = signed(caps.get(1)?.as_str())?;
    let dewpoint = caps.get(2).and_then(|m| signed(m.as_str()));
    Some((temperature, dewpoint))
}

/// Decode a `Qnnnn` (hPa) or `Annnn` (hundredths of inHg) pressure group into hPa
pub fn decode_pressure(token: &str) -> Option<u16> {
    let caps = lexer::pressure_captures(token)?;
    let value = caps.get(2)?.as_str().parse::<u16>().ok()?;
    match caps.get(1)?.as_str() {
        "Q" => Some(value),
        "A" => Some((f64::from(value) / 100.0 * INHG_TO_HPA).round() as u16),
        _ => None,
    }
}

/// Whether a visibility is low enough to expect an obscuring phenomenon
pub fn is_low_visibility(visibility: &Visibility) -> bool {
    visibility.meters < visibility::LOW_VISIBILITY_M
}
