//! Bulletin segmentation
//!
//! Splits raw bulletin text into individual report strings before they reach
//! the decoders. Archived bulletins usually prefix each report with a
//! `YYYYMMDDhhmm` timestamp; anything above the first such line is treated as
//! a header and skipped.

use crate::app::services::lexer::is_bulletin_prefix;
use crate::constants::{METAR_KEYWORD, MIN_REPORT_LENGTH, SPECI_KEYWORD, TAF_KEYWORD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Report type carried by a bulletin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Metar,
    Taf,
}

impl ReportKind {
    /// Keywords that open a report of this kind
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Metar => &[METAR_KEYWORD, SPECI_KEYWORD],
            ReportKind::Taf => &[TAF_KEYWORD],
        }
    }

    fn opens_report(&self, line: &str) -> bool {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(prefix), Some(keyword)) => {
                is_bulletin_prefix(prefix) && self.keywords().contains(&keyword)
            }
            _ => false,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Metar => f.write_str(METAR_KEYWORD),
            ReportKind::Taf => f.write_str(TAF_KEYWORD),
        }
    }
}

impl FromStr for ReportKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "METAR" | "SPECI" => Ok(ReportKind::Metar),
            "TAF" => Ok(ReportKind::Taf),
            other => Err(crate::Error::invalid_input(format!(
                "Unknown report kind '{}'",
                other
            ))),
        }
    }
}

/// Split bulletin text into report strings
///
/// Reports are `=`-terminated. Text without any terminator is split by line
/// instead. Each report has its internal whitespace collapsed to single
/// spaces and keeps its `=` terminator.
pub fn split_bulletin(text: &str, kind: ReportKind) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    let start = text
        .lines()
        .position(|line| kind.opens_report(line.trim()))
        .unwrap_or(0);
    let body = text.lines().skip(start).collect::<Vec<_>>().join("\n");

    debug!("{} bulletin body starts at line {}", kind, start + 1);

    let reports: Vec<String> = if body.contains('=') {
        body.split('=')
            .map(|fragment| format!("{}=", collapse_whitespace(fragment)))
            .filter(|report| report.len() > MIN_REPORT_LENGTH)
            .collect()
    } else {
        body.lines()
            .map(collapse_whitespace)
            .filter(|report| report.len() > MIN_REPORT_LENGTH)
            .collect()
    };

    debug!("Split {} {} reports", reports.len(), kind);
    reports
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const METAR_BULLETIN: &str = "SAIN31 VECC 111000\r\n\
        202406111000 METAR VECC 111000Z 19012KT 2000 +TSRA\r\n    SCT012 FEW025CB OVC080 26/21 Q1006=\r\n\
        202406111000 METAR VEPT 111000Z 09005KT 4000 HZ NSC 33/24 Q1004=\r\n\
        202406111010 SPECI VEGY 111010Z 00000KT 0800 FG=\r\n\
        NNNN=\r\n";

    #[test]
    fn test_split_skips_header_lines() {
        let reports = split_bulletin(METAR_BULLETIN, ReportKind::Metar);

        assert_eq!(reports.len(), 3);
        assert_eq!(
            reports[0],
            "202406111000 METAR VECC 111000Z 19012KT 2000 +TSRA SCT012 FEW025CB OVC080 26/21 Q1006="
        );
        assert!(reports[2].contains("SPECI VEGY"));
    }

    #[test]
    fn test_split_without_timestamps_starts_at_top() {
        let text = "TAF VECC 110500Z 1106/1212 19008KT 3500 HZ=\nTAF VIDP 110500Z 1106/1212 31005KT 5000=";
        let reports = split_bulletin(text, ReportKind::Taf);

        assert_eq!(reports.len(), 2);
        assert!(reports[1].starts_with("TAF VIDP"));
        assert!(reports[1].ends_with('='));
    }

    #[test]
    fn test_split_without_terminators_uses_lines() {
        let text = "METAR VECC 111000Z 19012KT 2000\n\nMETAR VIDP 111000Z 31005KT 5000\nNIL";
        let reports = split_bulletin(text, ReportKind::Metar);
        assert_eq!(reports, vec![
            "METAR VECC 111000Z 19012KT 2000".to_string(),
            "METAR VIDP 111000Z 31005KT 5000".to_string(),
        ]);
    }

    #[test]
    fn test_timestamp_must_precede_matching_keyword() {
        let text = "202406110500 METAR VECC 110500Z 19008KT 3500=\n\
                    202406110500 TAF VECC 110500Z 1106/1212 19008KT 3500 HZ=";
        let reports = split_bulletin(text, ReportKind::Taf);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("TAF VECC"));
    }

    #[test]
    fn test_report_kind_parsing() {
        assert_eq!("taf".parse::<ReportKind>().unwrap(), ReportKind::Taf);
        assert_eq!("SPECI".parse::<ReportKind>().unwrap(), ReportKind::Metar);
        assert!("synop".parse::<ReportKind>().is_err());
    }
}
