//! Header and change-group state machine for TAF reports

use crate::app::models::{
    CloudLayer, ForecastSegment, ReportTime, SegmentKind, TafReport, ValidityWindow, Visibility,
};
use crate::app::services::field_decoders::{
    decode_cloud, decode_visibility, decode_weather, decode_wind,
};
use crate::app::services::lexer::{self, ChangeKeyword};
use crate::constants::{CAVOK, REPORT_TERMINATOR, TAF_KEYWORD};
use std::iter::Peekable;
use std::str::SplitWhitespace;
use tracing::debug;

/// Best-effort TAF decoder
pub struct TafDecoder<'a> {
    tokens: Peekable<SplitWhitespace<'a>>,
    report: TafReport,
    /// Index of the segment receiving field groups (0 = base)
    current: usize,
}

impl<'a> TafDecoder<'a> {
    pub fn new(text: &'a str) -> Self {
        let body = text.trim().trim_end_matches(REPORT_TERMINATOR).trim_end();
        Self {
            tokens: body.split_whitespace().peekable(),
            report: TafReport::new(body),
            current: 0,
        }
    }

    pub fn decode(mut self) -> TafReport {
        if self.decode_header() {
            self.decode_body();
        }
        self.report
    }

    fn accept(&mut self, literal: &str) -> bool {
        self.tokens.next_if(|token| *token == literal).is_some()
    }

    /// Header groups through the validity period; `false` for NIL and CNL reports
    fn decode_header(&mut self) -> bool {
        self.tokens.next_if(|t| lexer::is_bulletin_prefix(t));
        self.accept(TAF_KEYWORD);

        loop {
            if self.accept("AMD") {
                self.report.amendment = true;
            } else if self.accept("COR") {
                self.report.correction = true;
            } else {
                break;
            }
        }

        match self.tokens.next_if(|t| lexer::is_station_token(t)) {
            Some(station) => self.report.station = Some(station.to_string()),
            None => debug!("No station group in '{}'", self.report.raw),
        }
        if let Some(token) = self.tokens.next_if(|t| lexer::is_time_token(t)) {
            self.report.issue_time = ReportTime::parse_observation(token);
        }
        if let Some(token) = self.tokens.next_if(|t| lexer::is_validity_token(t)) {
            self.report.validity = ValidityWindow::parse(token);
        }

        if self.accept("NIL") {
            self.report.nil = true;
            return false;
        }
        if self.accept("CNL") {
            self.report.cancelled = true;
            return false;
        }
        true
    }

    fn decode_body(&mut self) {
        while let Some(token) = self.tokens.next() {
            match lexer::classify_change_keyword(token) {
                Some(ChangeKeyword::From) => {
                    let time = self
                        .tokens
                        .next_if(|t| lexer::is_from_time_token(t))
                        .and_then(ReportTime::parse_digits);
                    match time {
                        Some(time) => self.open_segment(SegmentKind::From { time }),
                        None => debug!("Ignoring FM without a time group"),
                    }
                }
                Some(ChangeKeyword::FromWithTime) => {
                    match token.get(2..).and_then(ReportTime::parse_digits) {
                        Some(time) => self.open_segment(SegmentKind::From { time }),
                        None => debug!("Ignoring invalid from-time group '{}'", token),
                    }
                }
                Some(ChangeKeyword::Becoming) => match self.next_window() {
                    Some(window) => self.open_segment(SegmentKind::Becoming { window }),
                    None => debug!("Ignoring BECMG without a window"),
                },
                Some(ChangeKeyword::Temporary) => match self.next_window() {
                    Some(window) => self.open_segment(SegmentKind::Temporary { window }),
                    None => debug!("Ignoring TEMPO without a window"),
                },
                Some(ChangeKeyword::Probability(percent)) => {
                    let intermittent = self.accept("TEMPO");
                    let window = self.next_window();
                    self.open_segment(SegmentKind::Probability {
                        percent,
                        window,
                        intermittent,
                    });
                }
                Some(ChangeKeyword::NoSignificantChange) => self.report.nosig = true,
                None => self.apply_field(token),
            }
        }
    }

    fn next_window(&mut self) -> Option<ValidityWindow> {
        self.tokens
            .next_if(|t| lexer::is_validity_token(t))
            .and_then(ValidityWindow::parse)
    }

    fn open_segment(&mut self, kind: SegmentKind) {
        debug!("Opening {} segment", kind);
        self.report.changes.push(ForecastSegment::new(kind));
        self.current = self.report.changes.len();
    }

    fn current_segment(&mut self) -> &mut ForecastSegment {
        let index = self.current;
        if index == 0 || index > self.report.changes.len() {
            &mut self.report.base
        } else {
            &mut self.report.changes[index - 1]
        }
    }

    fn apply_field(&mut self, token: &str) {
        let segment = self.current_segment();
        if token == CAVOK {
            segment.cavok = true;
            segment.visibility = Some(Visibility::cavok());
            segment.clouds.push(CloudLayer::Clear);
        } else if lexer::is_wind_token(token) {
            segment.wind = Some(decode_wind(token));
        } else if lexer::is_visibility_token(token) {
            segment.visibility = decode_visibility(token);
        } else if lexer::is_weather_token(token) {
            segment.weather.extend(decode_weather(token));
        } else if lexer::is_cloud_token(token) {
            segment.clouds.extend(decode_cloud(token));
        } else {
            debug!("Dropping unrecognized TAF group '{}'", token);
        }
    }
}
