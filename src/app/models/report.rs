//! Decoded METAR and TAF reports

use super::time::{ReportTime, ValidityWindow};
use super::weather::{CloudLayer, Visibility, WeatherGroup, WeatherPhenomenon, Wind};
use crate::constants::SHORT_TAF_MAX_HOURS;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// METAR
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MetarType {
    #[default]
    Metar,
    Speci,
}

impl fmt::Display for MetarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetarType::Metar => f.write_str("METAR"),
            MetarType::Speci => f.write_str("SPECI"),
        }
    }
}

/// A decoded routine (METAR) or special (SPECI) observation
///
/// `station` is `None` when the station group could not be found; callers
/// treat that as a failed decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetarReport {
    pub report_type: MetarType,
    pub station: Option<String>,
    pub time: Option<ReportTime>,
    pub wind: Option<Wind>,
    /// Extremes of a variable wind direction (`180V240`)
    pub wind_variation: Option<(u16, u16)>,
    pub visibility: Option<Visibility>,
    pub runway_visual_range: Vec<String>,
    pub weather: Vec<WeatherPhenomenon>,
    pub clouds: Vec<CloudLayer>,
    pub temperature: Option<i8>,
    pub dewpoint: Option<i8>,
    /// Pressure in hPa
    pub qnh: Option<u16>,
    pub cavok: bool,
    pub corrected: bool,
    pub automated: bool,
    pub nil: bool,
    pub supplementary: Vec<String>,
    pub raw: String,
}

impl MetarReport {
    pub fn is_decoded(&self) -> bool {
        self.station.is_some()
    }
}

// =============================================================================
// TAF
// =============================================================================

/// Change group kind of a forecast segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Initial conditions of the forecast
    Base,
    /// `FM`: replaces all prior conditions from `time`
    From { time: ReportTime },
    /// `BECMG`: gradual change across the window
    Becoming { window: ValidityWindow },
    /// `TEMPO`: intermittent conditions inside the window
    Temporary { window: ValidityWindow },
    /// `PROB30`/`PROB40`, optionally combined with `TEMPO`
    Probability {
        percent: u8,
        window: Option<ValidityWindow>,
        intermittent: bool,
    },
}

impl SegmentKind {
    pub fn label(&self) -> String {
        match self {
            SegmentKind::Base => "BASE".to_string(),
            SegmentKind::From { time } => {
                format!("FM{:02}{:02}{:02}", time.day, time.hour, time.minute)
            }
            SegmentKind::Becoming { window } => format!("BECMG {}", window),
            SegmentKind::Temporary { window } => format!("TEMPO {}", window),
            SegmentKind::Probability {
                percent,
                window,
                intermittent,
            } => {
                let mut label = format!("PROB{}", percent);
                if *intermittent {
                    label.push_str(" TEMPO");
                }
                if let Some(window) = window {
                    label.push_str(&format!(" {}", window));
                }
                label
            }
        }
    }

    /// The window of a windowed change group
    pub fn window(&self) -> Option<ValidityWindow> {
        match self {
            SegmentKind::Becoming { window } | SegmentKind::Temporary { window } => Some(*window),
            SegmentKind::Probability { window, .. } => *window,
            _ => None,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Forecast conditions of one TAF segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSegment {
    pub kind: SegmentKind,
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    pub weather: Vec<WeatherPhenomenon>,
    pub clouds: Vec<CloudLayer>,
    pub cavok: bool,
}

impl ForecastSegment {
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            wind: None,
            visibility: None,
            weather: Vec::new(),
            clouds: Vec::new(),
            cavok: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wind.is_none()
            && self.visibility.is_none()
            && self.weather.is_empty()
            && self.clouds.is_empty()
    }

    pub fn weather_groups(&self) -> impl Iterator<Item = &WeatherGroup> {
        super::weather::weather_groups(&self.weather)
    }

    /// Whether the segment forecasts thunderstorms or heavy rain
    pub fn has_severe_weather(&self) -> bool {
        self.weather_groups()
            .any(|g| g.is_thunderstorm() || g.is_heavy_rain())
    }
}

/// Short (up to 12 h) or long validity TAF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TafClass {
    Short,
    Long,
}

/// A decoded terminal aerodrome forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TafReport {
    pub station: Option<String>,
    pub issue_time: Option<ReportTime>,
    pub validity: Option<ValidityWindow>,
    pub amendment: bool,
    pub correction: bool,
    pub nil: bool,
    pub cancelled: bool,
    pub nosig: bool,
    pub base: ForecastSegment,
    /// Change groups in textual order
    pub changes: Vec<ForecastSegment>,
    pub raw: String,
}

impl TafReport {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            station: None,
            issue_time: None,
            validity: None,
            amendment: false,
            correction: false,
            nil: false,
            cancelled: false,
            nosig: false,
            base: ForecastSegment::new(SegmentKind::Base),
            changes: Vec::new(),
            raw: raw.into(),
        }
    }

    pub fn is_decoded(&self) -> bool {
        self.station.is_some()
    }

    /// Segment by index, where index 0 is the base and `n` is `changes[n - 1]`
    pub fn segment(&self, index: usize) -> Option<&ForecastSegment> {
        match index {
            0 => Some(&self.base),
            n => self.changes.get(n - 1),
        }
    }

    /// Base followed by change groups
    pub fn segments(&self) -> impl Iterator<Item = &ForecastSegment> {
        std::iter::once(&self.base).chain(self.changes.iter())
    }

    pub fn validity_hours(&self) -> Option<i64> {
        self.validity.map(|v| v.duration_hours())
    }

    pub fn class(&self) -> Option<TafClass> {
        self.validity_hours().map(|hours| {
            if hours <= SHORT_TAF_MAX_HOURS {
                TafClass::Short
            } else {
                TafClass::Long
            }
        })
    }
}
