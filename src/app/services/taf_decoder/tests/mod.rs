//! Shared fixtures for TAF decoder tests


pub const KOLKATA_TAF: &str = "TAF VECC 110500Z 1106/1212 19008KT 3500 HZ SCT018 BKN100 \
                               TEMPO 1108/1112 2000 TSRA SCT015 FEW025CB OVC090=";

pub const MUMBAI_CAVOK_TAF: &str = "TAF VABB 120500Z 1206/1306 27008KT CAVOK=";

pub const DELHI_CHANGE_GROUPS_TAF: &str = "TAF AMD VIDP 110230Z 1103/1206 31008KT 4000 HZ NSC \
                                           BECMG 1106/1108 32012G22KT 6000 \
                                           FM111400 VRB03KT 1500 BR SCT010 \
                                           PROB30 TEMPO 1120/1124 0800 FG VV002 \
                                           PROB40 1202/1205 0500 FG=";
