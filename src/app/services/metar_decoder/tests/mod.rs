//! Shared fixtures for METAR decoder tests


pub const HAZE_METAR: &str = "METAR VECC 110800Z 20010KT 3000 HZ SCT015 BKN080 28/22 Q1008=";
pub const THUNDERSTORM_METAR: &str =
    "METAR VECC 111000Z 19012KT 2000 +TSRA SCT012 FEW025CB OVC080 26/21 Q1006=";
pub const CAVOK_METAR: &str = "METAR VABB 121200Z 27010KT CAVOK 30/24 Q1010=";
