//! Decoded weather elements shared by METAR and TAF reports

use crate::constants::{cloud, visibility};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Wind
// =============================================================================

/// Surface wind group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Wind {
    Calm,
    Variable {
        speed: u16,
        gust: Option<u16>,
    },
    Directional {
        direction: u16,
        speed: u16,
        gust: Option<u16>,
    },
    /// Direction could not be read (e.g. `///05KT`)
    Unparsed {
        raw: String,
    },
}

impl Wind {
    /// Mean speed in knots, zero when calm
    pub fn speed(&self) -> Option<u16> {
        match self {
            Wind::Calm => Some(0),
            Wind::Variable { speed, .. } | Wind::Directional { speed, .. } => Some(*speed),
            Wind::Unparsed { .. } => None,
        }
    }

    pub fn gust(&self) -> Option<u16> {
        match self {
            Wind::Variable { gust, .. } | Wind::Directional { gust, .. } => *gust,
            _ => None,
        }
    }

    pub fn is_calm(&self) -> bool {
        matches!(self, Wind::Calm)
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wind::Calm => write!(f, "Calm"),
            Wind::Variable { speed, gust } => {
                write!(f, "Variable at {} KT", speed)?;
                if let Some(gust) = gust {
                    write!(f, ", Gusts to {} KT", gust)?;
                }
                Ok(())
            }
            Wind::Directional {
                direction,
                speed,
                gust,
            } => {
                write!(f, "{:03}° at {} KT", direction, speed)?;
                if let Some(gust) = gust {
                    write!(f, ", Gusts to {} KT", gust)?;
                }
                Ok(())
            }
            Wind::Unparsed { raw } => write!(f, "{}", raw),
        }
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Flight category derived from visibility or ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightCategory {
    #[serde(rename = "LIFR")]
    Lifr,
    #[serde(rename = "IFR")]
    Ifr,
    #[serde(rename = "MVFR")]
    Mvfr,
    #[serde(rename = "VFR")]
    Vfr,
    /// Ceilings at or above 3000 ft, or no ceiling at all
    #[serde(rename = "VFR+")]
    VfrPlus,
}

impl FlightCategory {
    pub fn from_visibility(meters: u32) -> Self {
        if meters < visibility::LIFR_BELOW_M {
            FlightCategory::Lifr
        } else if meters < visibility::IFR_BELOW_M {
            FlightCategory::Ifr
        } else if meters < visibility::MVFR_BELOW_M {
            FlightCategory::Mvfr
        } else {
            FlightCategory::Vfr
        }
    }

    /// Category of a ceiling; `None` means no ceiling
    pub fn from_ceiling(feet: Option<u32>) -> Self {
        match feet {
            Some(ft) if ft < cloud::LIFR_BELOW_FT => FlightCategory::Lifr,
            Some(ft) if ft < cloud::IFR_BELOW_FT => FlightCategory::Ifr,
            Some(ft) if ft < cloud::MVFR_BELOW_FT => FlightCategory::Mvfr,
            Some(ft) if ft < cloud::VFR_BELOW_FT => FlightCategory::Vfr,
            _ => FlightCategory::VfrPlus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightCategory::Lifr => "LIFR",
            FlightCategory::Ifr => "IFR",
            FlightCategory::Mvfr => "MVFR",
            FlightCategory::Vfr => "VFR",
            FlightCategory::VfrPlus => "VFR+",
        }
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prevailing visibility in meters
///
/// The category is always recomputed from the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub meters: u32,
}

impl Visibility {
    pub fn new(meters: u32) -> Self {
        Self { meters }
    }

    pub fn cavok() -> Self {
        Self::new(visibility::CAVOK_METERS)
    }

    pub fn category(&self) -> FlightCategory {
        FlightCategory::from_visibility(self.meters)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meters >= visibility::CAVOK_METERS {
            write!(f, "10 km or more")
        } else {
            write!(f, "{} m", self.meters)
        }
    }
}

// =============================================================================
// Cloud
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudCoverage {
    Few,
    Scattered,
    Broken,
    Overcast,
}

impl CloudCoverage {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FEW" => Some(CloudCoverage::Few),
            "SCT" => Some(CloudCoverage::Scattered),
            "BKN" => Some(CloudCoverage::Broken),
            "OVC" => Some(CloudCoverage::Overcast),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CloudCoverage::Few => "FEW",
            CloudCoverage::Scattered => "SCT",
            CloudCoverage::Broken => "BKN",
            CloudCoverage::Overcast => "OVC",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CloudCoverage::Few => "Few (1-2/8)",
            CloudCoverage::Scattered => "Scattered (3-4/8)",
            CloudCoverage::Broken => "Broken (5-7/8)",
            CloudCoverage::Overcast => "Overcast (8/8)",
        }
    }

    /// Broken and overcast layers form a ceiling
    pub fn forms_ceiling(&self) -> bool {
        matches!(self, CloudCoverage::Broken | CloudCoverage::Overcast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConvectiveType {
    #[default]
    None,
    Cumulonimbus,
    ToweringCumulus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CloudLayer {
    /// SKC, CLR, or the cloud part of CAVOK
    Clear,
    /// NSC or NCD
    NoSignificantCloud,
    VerticalVisibility {
        height_feet: Option<u32>,
    },
    Layer {
        coverage: CloudCoverage,
        height_feet: Option<u32>,
        convective: ConvectiveType,
    },
}

impl CloudLayer {
    /// Height of this layer if it counts towards the ceiling
    pub fn ceiling_height(&self) -> Option<u32> {
        match self {
            CloudLayer::Layer {
                coverage,
                height_feet,
                ..
            } if coverage.forms_ceiling() => *height_feet,
            _ => None,
        }
    }

    pub fn is_cumulonimbus(&self) -> bool {
        matches!(
            self,
            CloudLayer::Layer {
                convective: ConvectiveType::Cumulonimbus,
                ..
            }
        )
    }
}

/// Lowest broken or overcast layer with a known height
pub fn ceiling(layers: &[CloudLayer]) -> Option<u32> {
    layers.iter().filter_map(CloudLayer::ceiling_height).min()
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudLayer::Clear => write!(f, "Sky Clear"),
            CloudLayer::NoSignificantCloud => write!(f, "No Significant Cloud"),
            CloudLayer::VerticalVisibility { height_feet } => match height_feet {
                Some(ft) => write!(f, "Vertical Visibility: {} ft", ft),
                None => write!(f, "Vertical Visibility: Unknown"),
            },
            CloudLayer::Layer {
                coverage,
                height_feet,
                convective,
            } => {
                write!(f, "{}", coverage.description())?;
                if let Some(ft) = height_feet {
                    write!(f, " at {} ft", ft)?;
                }
                match convective {
                    ConvectiveType::Cumulonimbus => write!(f, " (Cumulonimbus)"),
                    ConvectiveType::ToweringCumulus => write!(f, " (Towering Cumulus)"),
                    ConvectiveType::None => Ok(()),
                }
            }
        }
    }
}

// =============================================================================
// Present Weather
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Intensity {
    Light,
    #[default]
    Moderate,
    Heavy,
}

impl Intensity {
    pub fn prefix(&self) -> &'static str {
        match self {
            Intensity::Light => "-",
            Intensity::Moderate => "",
            Intensity::Heavy => "+",
        }
    }
}

macro_rules! code_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($code:literal, $text:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }
    };
}

code_enum! {
    /// Weather descriptor qualifying the phenomena that follow it
    Descriptor {
        Shallow => ("MI", "Shallow"),
        Patches => ("BC", "Patches"),
        Partial => ("PR", "Partial"),
        LowDrifting => ("DR", "Low Drifting"),
        Blowing => ("BL", "Blowing"),
        Showers => ("SH", "Showers"),
        Thunderstorm => ("TS", "Thunderstorm"),
        Freezing => ("FZ", "Freezing"),
        Vicinity => ("VC", "Vicinity"),
    }
}

code_enum! {
    Phenomenon {
        Drizzle => ("DZ", "Drizzle"),
        Rain => ("RA", "Rain"),
        Snow => ("SN", "Snow"),
        SnowGrains => ("SG", "Snow Grains"),
        IceCrystals => ("IC", "Ice Crystals"),
        IcePellets => ("PL", "Ice Pellets"),
        Hail => ("GR", "Hail"),
        SmallHail => ("GS", "Small Hail"),
        UnknownPrecipitation => ("UP", "Unknown Precipitation"),
        Mist => ("BR", "Mist"),
        Fog => ("FG", "Fog"),
        Smoke => ("FU", "Smoke"),
        VolcanicAsh => ("VA", "Volcanic Ash"),
        Dust => ("DU", "Dust"),
        Sand => ("SA", "Sand"),
        Haze => ("HZ", "Haze"),
        DustWhirls => ("PO", "Dust/Sand Whirls"),
        Squalls => ("SQ", "Squalls"),
        FunnelCloud => ("FC", "Funnel Cloud"),
        Sandstorm => ("SS", "Sandstorm"),
        Duststorm => ("DS", "Duststorm"),
    }
}

/// One present-weather group such as `+TSRA` or `VCSH`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherGroup {
    pub intensity: Intensity,
    pub descriptors: Vec<Descriptor>,
    pub phenomena: Vec<Phenomenon>,
}

impl WeatherGroup {
    pub fn has_descriptor(&self, descriptor: Descriptor) -> bool {
        self.descriptors.contains(&descriptor)
    }

    pub fn has_phenomenon(&self, phenomenon: Phenomenon) -> bool {
        self.phenomena.contains(&phenomenon)
    }

    pub fn is_thunderstorm(&self) -> bool {
        self.has_descriptor(Descriptor::Thunderstorm)
    }

    pub fn is_heavy_rain(&self) -> bool {
        self.intensity == Intensity::Heavy && self.has_phenomenon(Phenomenon::Rain)
    }

    /// Canonical codes used for set comparison
    ///
    /// Proximity (`VC`) qualifies location rather than the weather itself and
    /// is left out.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors
            .iter()
            .filter(|d| **d != Descriptor::Vicinity)
            .map(Descriptor::code)
            .chain(self.phenomena.iter().map(Phenomenon::code))
    }
}

impl fmt::Display for WeatherGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<String> = Vec::new();
        match self.intensity {
            Intensity::Light => words.push("Light".to_string()),
            Intensity::Heavy => words.push("Heavy".to_string()),
            Intensity::Moderate => {}
        }
        words.extend(self.descriptors.iter().map(|d| d.description().to_string()));
        if !self.phenomena.is_empty() {
            let phenomena: Vec<&str> = self.phenomena.iter().map(Phenomenon::description).collect();
            words.push(phenomena.join(" and "));
        }
        write!(f, "{}", words.join(" "))
    }
}

/// A present-weather entry, or the explicit "no significant weather" sentinel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeatherPhenomenon {
    NoSignificantWeather,
    Group(WeatherGroup),
}

impl WeatherPhenomenon {
    pub fn group(&self) -> Option<&WeatherGroup> {
        match self {
            WeatherPhenomenon::Group(group) => Some(group),
            WeatherPhenomenon::NoSignificantWeather => None,
        }
    }
}

impl fmt::Display for WeatherPhenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherPhenomenon::NoSignificantWeather => write!(f, "No Significant Weather"),
            WeatherPhenomenon::Group(group) => write!(f, "{}", group),
        }
    }
}

/// Iterate over the actual weather groups, skipping NSW
pub fn weather_groups(weather: &[WeatherPhenomenon]) -> impl Iterator<Item = &WeatherGroup> {
    weather.iter().filter_map(WeatherPhenomenon::group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DESCRIPTOR_CODES, PHENOMENON_CODES};

    #[test]
    fn test_code_tables_round_trip() {
        for code in DESCRIPTOR_CODES {
            assert_eq!(Descriptor::from_code(code).map(|d| d.code()), Some(*code));
        }
        for code in PHENOMENON_CODES {
            assert_eq!(Phenomenon::from_code(code).map(|p| p.code()), Some(*code));
        }
        assert_eq!(PHENOMENON_CODES.len(), 21);
        assert!(Phenomenon::from_code("XX").is_none());
    }

    #[test]
    fn test_wind_display() {
        let wind = Wind::Directional {
            direction: 90,
            speed: 12,
            gust: Some(25),
        };
        assert_eq!(wind.to_string(), "090° at 12 KT, Gusts to 25 KT");
        assert_eq!(Wind::Calm.to_string(), "Calm");
    }

    #[test]
    fn test_visibility_categories() {
        assert_eq!(Visibility::new(400).category(), FlightCategory::Lifr);
        assert_eq!(Visibility::new(500).category(), FlightCategory::Ifr);
        assert_eq!(Visibility::new(1499).category(), FlightCategory::Ifr);
        assert_eq!(Visibility::new(3500).category(), FlightCategory::Mvfr);
        assert_eq!(Visibility::new(5000).category(), FlightCategory::Vfr);
    }

    #[test]
    fn test_ceiling_ignores_few_and_scattered() {
        let layers = vec![
            CloudLayer::Layer {
                coverage: CloudCoverage::Scattered,
                height_feet: Some(1200),
                convective: ConvectiveType::None,
            },
            CloudLayer::Layer {
                coverage: CloudCoverage::Overcast,
                height_feet: Some(9000),
                convective: ConvectiveType::None,
            },
            CloudLayer::Layer {
                coverage: CloudCoverage::Broken,
                height_feet: Some(8000),
                convective: ConvectiveType::None,
            },
        ];
        assert_eq!(ceiling(&layers), Some(8000));
        assert_eq!(ceiling(&[CloudLayer::Clear]), None);
    }

    #[test]
    fn test_ceiling_categories() {
        assert_eq!(FlightCategory::from_ceiling(Some(100)), FlightCategory::Lifr);
        assert_eq!(FlightCategory::from_ceiling(Some(800)), FlightCategory::Mvfr);
        assert_eq!(FlightCategory::from_ceiling(Some(2500)), FlightCategory::Vfr);
        assert_eq!(FlightCategory::from_ceiling(Some(3000)), FlightCategory::VfrPlus);
        assert_eq!(FlightCategory::from_ceiling(None), FlightCategory::VfrPlus);
    }

    #[test]
    fn test_weather_group_display_and_codes() {
        let group = WeatherGroup {
            intensity: Intensity::Heavy,
            descriptors: vec![Descriptor::Thunderstorm],
            phenomena: vec![Phenomenon::Rain, Phenomenon::Hail],
        };
        assert_eq!(group.to_string(), "Heavy Thunderstorm Rain and Hail");
        assert_eq!(group.codes().collect::<Vec<_>>(), vec!["TS", "RA", "GR"]);
        assert!(group.is_heavy_rain());
    }
}
