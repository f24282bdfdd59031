//! Token state machine for METAR and SPECI reports

use crate::app::models::{CloudLayer, MetarReport, MetarType, ReportTime, Visibility};
use crate::app::services::field_decoders::{
    decode_cloud, decode_pressure, decode_temperature, decode_visibility, decode_weather,
    decode_wind, decode_wind_variation,
};
use crate::app::services::lexer;
use crate::constants::{CAVOK, METAR_KEYWORD, REPORT_TERMINATOR, SPECI_KEYWORD};
use std::iter::Peekable;
use std::str::SplitWhitespace;
use tracing::debug;

/// Best-effort METAR decoder
///
/// `decode` always returns a report. A report whose `station` is `None`
/// should be treated as a failed decode.
pub struct MetarDecoder<'a> {
    tokens: Peekable<SplitWhitespace<'a>>,
    report: MetarReport,
}

impl<'a> MetarDecoder<'a> {
    pub fn new(text: &'a str) -> Self {
        let body = text.trim().trim_end_matches(REPORT_TERMINATOR).trim_end();
        Self {
            tokens: body.split_whitespace().peekable(),
            report: MetarReport {
                raw: body.to_string(),
                ..MetarReport::default()
            },
        }
    }

    pub fn decode(mut self) -> MetarReport {
        if self.decode_header() {
            self.decode_body();
        }
        self.report
    }

    fn accept(&mut self, literal: &str) -> bool {
        self.tokens.next_if(|token| *token == literal).is_some()
    }

    /// Header groups up to the observation time; `false` once a NIL report is seen
    fn decode_header(&mut self) -> bool {
        self.tokens.next_if(|t| lexer::is_bulletin_prefix(t));

        if self.accept(SPECI_KEYWORD) {
            self.report.report_type = MetarType::Speci;
        } else {
            self.accept(METAR_KEYWORD);
        }

        if self.accept("COR") {
            self.report.corrected = true;
        }
        if self.accept("NIL") {
            self.report.nil = true;
            return false;
        }
        if self.accept("AUTO") {
            self.report.automated = true;
        }

        match self.tokens.next_if(|t| lexer::is_station_token(t)) {
            Some(station) => self.report.station = Some(station.to_string()),
            None => debug!("No station group in '{}'", self.report.raw),
        }

        if let Some(token) = self.tokens.next_if(|t| lexer::is_time_token(t)) {
            self.report.time = ReportTime::parse_observation(token);
        }

        // Modifiers may also follow the time group
        loop {
            if self.accept("NIL") {
                self.report.nil = true;
                return false;
            } else if self.accept("AUTO") {
                self.report.automated = true;
            } else if self.accept("COR") {
                self.report.corrected = true;
            } else {
                return true;
            }
        }
    }

    fn decode_body(&mut self) {
        if let Some(token) = self.tokens.next_if(|t| lexer::is_wind_token(t)) {
            self.report.wind = Some(decode_wind(token));
        }
        if let Some(token) = self.tokens.next_if(|t| lexer::is_wind_variation_token(t)) {
            self.report.wind_variation = decode_wind_variation(token);
        }

        if self.accept(CAVOK) {
            self.report.cavok = true;
            self.report.visibility = Some(Visibility::cavok());
            self.report.clouds.push(CloudLayer::Clear);
        } else {
            if let Some(token) = self.tokens.next_if(|t| lexer::is_visibility_token(t)) {
                self.report.visibility = decode_visibility(token);
            }
            while let Some(token) = self.tokens.next_if(|t| lexer::is_rvr_token(t)) {
                self.report.runway_visual_range.push(token.to_string());
            }
            while let Some(token) = self.tokens.next_if(|t| lexer::is_weather_token(t)) {
                if let Some(weather) = decode_weather(token) {
                    self.report.weather.push(weather);
                }
            }
            while let Some(token) = self.tokens.next_if(|t| lexer::is_cloud_token(t)) {
                if let Some(layer) = decode_cloud(token) {
                    self.report.clouds.push(layer);
                }
            }
        }

        if let Some(token) = self.tokens.next_if(|t| lexer::is_temperature_token(t)) {
            if let Some((temperature, dewpoint)) = decode_temperature(token) {
                self.report.temperature = Some(temperature);
                self.report.dewpoint = dewpoint;
            }
        }
        if let Some(token) = self.tokens.next_if(|t| lexer::is_pressure_token(t)) {
            self.report.qnh = decode_pressure(token);
        }

        self.report.supplementary = self.tokens.by_ref().map(str::to_string).collect();
        if let Some(first) = self.report.supplementary.first() {
            debug!(
                "METAR {} structured groups end at '{}'",
                self.report.station.as_deref().unwrap_or("????"),
                first
            );
        }
    }
}
