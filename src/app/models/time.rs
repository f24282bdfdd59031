//! Report time handling
//!
//! METAR and TAF groups carry only day-of-month, hour and minute. All
//! arithmetic here works on minute offsets from the start of a notional
//! month and corrects for month rollover with a synthetic 30-day month.

use crate::constants::{
    MINUTES_PER_DAY, MINUTES_PER_HOUR, ROLLOVER_THRESHOLD_MINUTES, SYNTHETIC_MONTH_MINUTES,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Report Time
// =============================================================================

/// Day-of-month, hour and minute of a report group
///
/// Hour 24 is accepted for day/hour groups (`1224` ends a validity period at
/// midnight) and is equivalent to hour 00 of the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportTime {
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl ReportTime {
    /// Build a time, rejecting out-of-range fields
    pub fn new(day: u8, hour: u8, minute: u8) -> Option<Self> {
        let valid = (1..=31).contains(&day)
            && (hour <= 23 || (hour == 24 && minute == 0))
            && minute <= 59;
        valid.then_some(Self { day, hour, minute })
    }

    /// Parse a `DDHHMMZ` observation or issue time group
    pub fn parse_observation(token: &str) -> Option<Self> {
        let digits = token.strip_suffix('Z')?;
        if digits.len() != 6 {
            return None;
        }
        Self::parse_digits(digits)
    }

    /// Parse a `DDHH` or `DDHHMM` group
    pub fn parse_digits(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let field = |range: std::ops::Range<usize>| digits.get(range)?.parse::<u8>().ok();
        match digits.len() {
            4 => Self::new(field(0..2)?, field(2..4)?, 0),
            6 => Self::new(field(0..2)?, field(2..4)?, field(4..6)?),
            _ => None,
        }
    }

    /// Minutes since the start of the notional month
    pub fn minute_index(&self) -> i64 {
        i64::from(self.day) * MINUTES_PER_DAY
            + i64::from(self.hour) * MINUTES_PER_HOUR
            + i64::from(self.minute)
    }

    /// The same time with minutes discarded
    pub fn truncated_to_hour(&self) -> Self {
        Self { minute: 0, ..*self }
    }
}

impl fmt::Display for ReportTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}Z", self.day, self.hour, self.minute)
    }
}

// =============================================================================
// Validity Window
// =============================================================================

/// An inclusive `ddhh/ddhh` window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidityWindow {
    pub from: ReportTime,
    pub to: ReportTime,
}

impl ValidityWindow {
    /// Parse a `ddhh/ddhh` token
    pub fn parse(token: &str) -> Option<Self> {
        let (from, to) = token.split_once('/')?;
        if from.len() != 4 || to.len() != 4 {
            return None;
        }
        Some(Self {
            from: ReportTime::parse_digits(from)?,
            to: ReportTime::parse_digits(to)?,
        })
    }

    /// Window bounds in minutes, with `to` moved into the next month when
    /// the window crosses month end
    pub fn span_minutes(&self) -> (i64, i64) {
        let from = self.from.minute_index();
        let mut to = self.to.minute_index();
        if to < from {
            to += SYNTHETIC_MONTH_MINUTES;
        }
        (from, to)
    }

    /// Window length in whole hours
    pub fn duration_hours(&self) -> i64 {
        let (from, to) = self.span_minutes();
        (to - from) / MINUTES_PER_HOUR
    }

    /// Whether `time`, truncated to the hour, falls inside the window
    pub fn contains(&self, time: ReportTime) -> bool {
        let (from, to) = self.span_minutes();
        let t = Timeline::anchored_at(self.from).position(time.truncated_to_hour());
        from <= t && t <= to
    }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}/{:02}{:02}",
            self.from.day, self.from.hour, self.to.day, self.to.hour
        )
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// Places report times on a single axis relative to an anchor time
///
/// A time more than fifteen days before the anchor is taken to belong to
/// the following month and is shifted forward by one synthetic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    anchor: i64,
}

impl Timeline {
    pub fn anchored_at(anchor: ReportTime) -> Self {
        Self {
            anchor: anchor.minute_index(),
        }
    }

    /// Position of `time` in minutes on this timeline
    pub fn position(&self, time: ReportTime) -> i64 {
        let minutes = time.minute_index();
        if self.anchor - minutes > ROLLOVER_THRESHOLD_MINUTES {
            minutes + SYNTHETIC_MONTH_MINUTES
        } else {
            minutes
        }
    }
}

/// Signed hours from `earlier` to `later`, corrected for month rollover
pub fn hours_between(earlier: ReportTime, later: ReportTime) -> f64 {
    let start = earlier.minute_index();
    let end = Timeline::anchored_at(earlier).position(later);
    (end - start) as f64 / MINUTES_PER_HOUR as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(day: u8, hour: u8, minute: u8) -> ReportTime {
        ReportTime::new(day, hour, minute).unwrap()
    }

    #[test]
    fn test_parse_observation_time() {
        assert_eq!(
            ReportTime::parse_observation("110800Z"),
            Some(time(11, 8, 0))
        );
        assert_eq!(ReportTime::parse_observation("110800"), None);
        assert_eq!(ReportTime::parse_observation("322500Z"), None);
        assert_eq!(ReportTime::parse_observation("11080Z"), None);
    }

    #[test]
    fn test_parse_digits_accepts_hour_24_only_on_the_hour() {
        assert_eq!(ReportTime::parse_digits("1224"), Some(time(12, 24, 0)));
        assert_eq!(ReportTime::parse_digits("122430"), None);
        assert_eq!(ReportTime::parse_digits("0012"), None);
    }

    #[test]
    fn test_window_contains_same_month() {
        let window = ValidityWindow::parse("1106/1212").unwrap();
        assert!(window.contains(time(11, 6, 0)));
        assert!(window.contains(time(12, 12, 30)));
        assert!(!window.contains(time(12, 13, 0)));
        assert!(!window.contains(time(11, 5, 59)));
    }

    #[test]
    fn test_window_contains_across_month_end() {
        let window = ValidityWindow::parse("2812/0112").unwrap();
        assert!(window.contains(time(1, 6, 0)));
        assert!(window.contains(time(30, 23, 0)));
        assert!(!window.contains(time(1, 13, 0)));
        assert_eq!(window.duration_hours(), 30 * 24 - 27 * 24);
    }

    #[test]
    fn test_hours_between_with_rollover() {
        assert_eq!(hours_between(time(11, 5, 0), time(11, 10, 0)), 5.0);
        assert_eq!(hours_between(time(30, 23, 0), time(1, 5, 0)), 6.0);
        assert_eq!(hours_between(time(11, 10, 0), time(11, 8, 0)), -2.0);
    }
}
