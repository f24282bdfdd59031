//! Resolving the forecast conditions in force at observation time
//!
//! Resolution runs in two passes over the change groups:
//!
//! 1. In textual order, every `FM` group starting at or before the
//!    observation replaces the accumulated conditions, and every `BECMG`
//!    group whose window has already ended overrides the fields it names.
//! 2. Windowed groups after the last applied `FM` whose window contains the
//!    observation hour override the fields they name, in the order
//!    `PROB`, then `BECMG`, then `TEMPO`, so a `TEMPO` group has the final say.

use crate::app::models::{
    ActiveSegment, CloudLayer, ForecastSegment, ReportTime, SegmentKind, TafReport, Timeline,
    ValidityWindow, Visibility, WeatherPhenomenon, Wind,
};
use crate::config::VerificationConfig;
use tracing::debug;

/// Forecast values after all applicable change groups were applied
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedConditions {
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    pub weather: Vec<WeatherPhenomenon>,
    pub clouds: Vec<CloudLayer>,
    pub cavok: bool,
}

impl From<&ForecastSegment> for ResolvedConditions {
    fn from(segment: &ForecastSegment) -> Self {
        Self {
            wind: segment.wind.clone(),
            visibility: segment.visibility,
            weather: segment.weather.clone(),
            clouds: segment.clouds.clone(),
            cavok: segment.cavok,
        }
    }
}

impl ResolvedConditions {
    /// Override only the fields the segment specifies; lists replace lists
    ///
    /// A CAVOK segment also clears any weather still in force.
    pub fn override_with(&mut self, segment: &ForecastSegment) {
        if segment.cavok {
            self.weather.clear();
        }
        if let Some(wind) = &segment.wind {
            self.wind = Some(wind.clone());
        }
        if let Some(visibility) = segment.visibility {
            self.visibility = Some(visibility);
        }
        if !segment.weather.is_empty() {
            self.weather = segment.weather.clone();
        }
        if !segment.clouds.is_empty() {
            self.clouds = segment.clouds.clone();
        }
        if segment.visibility.is_some() || !segment.clouds.is_empty() {
            self.cavok = segment.cavok;
        }
    }
}

fn window_precedence(kind: &SegmentKind) -> Option<u8> {
    match kind {
        SegmentKind::Probability { .. } => Some(0),
        SegmentKind::Becoming { .. } => Some(1),
        SegmentKind::Temporary { .. } => Some(2),
        SegmentKind::Base | SegmentKind::From { .. } => None,
    }
}

fn is_intermittent(kind: &SegmentKind) -> bool {
    matches!(
        kind,
        SegmentKind::Temporary { .. }
            | SegmentKind::Probability {
                intermittent: true,
                ..
            }
    )
}

/// Whether a window ended at or before `time` without containing it
fn has_ended(window: &ValidityWindow, timeline: &Timeline, time: ReportTime) -> bool {
    if window.contains(time) {
        return false;
    }
    let (from, to) = window.span_minutes();
    let end = timeline.position(window.from) + (to - from);
    end <= timeline.position(time)
}

/// Resolve the conditions of `forecast` at `time`
pub fn resolve_conditions(
    forecast: &TafReport,
    time: ReportTime,
    config: &VerificationConfig,
) -> (ResolvedConditions, ActiveSegment) {
    let anchor = forecast
        .validity
        .map(|validity| validity.from)
        .or(forecast.issue_time)
        .unwrap_or(time);
    let timeline = Timeline::anchored_at(anchor);
    let now = timeline.position(time);

    let mut conditions = ResolvedConditions::from(&forecast.base);
    let mut applied = vec![0];
    let mut last_from = 0;

    for (offset, segment) in forecast.changes.iter().enumerate() {
        let index = offset + 1;
        match segment.kind {
            SegmentKind::From { time: start } if timeline.position(start) <= now => {
                conditions = ResolvedConditions::from(segment);
                applied = vec![index];
                last_from = index;
            }
            SegmentKind::Becoming { window } if has_ended(&window, &timeline, time) => {
                conditions.override_with(segment);
                applied.push(index);
            }
            _ => {}
        }
    }

    let mut windowed: Vec<(u8, usize, &ForecastSegment)> = forecast
        .changes
        .iter()
        .enumerate()
        .map(|(offset, segment)| (offset + 1, segment))
        .filter(|(index, _)| *index > last_from)
        .filter_map(|(index, segment)| {
            let precedence = window_precedence(&segment.kind)?;
            let window = segment.kind.window()?;
            window
                .contains(time)
                .then_some((precedence, index, segment))
        })
        .collect();
    windowed.sort_by_key(|(precedence, index, _)| (*precedence, *index));

    let mut active_index = last_from;
    let mut in_transition = false;
    let mut temporary_weight = None;

    for (_, index, segment) in windowed {
        conditions.override_with(segment);
        applied.push(index);
        active_index = index;

        if matches!(segment.kind, SegmentKind::Becoming { .. }) {
            in_transition = true;
        }
        if is_intermittent(&segment.kind) {
            temporary_weight = Some(if segment.has_severe_weather() {
                config.severe_temporary_weight
            } else {
                config.temporary_weight
            });
        }
    }

    let kind = forecast
        .segment(active_index)
        .map(|segment| segment.kind)
        .unwrap_or(SegmentKind::Base);
    debug!(
        "Active segment at {}: {} (applied {:?}, transition {})",
        time, kind, applied, in_transition
    );

    (
        conditions,
        ActiveSegment {
            index: active_index,
            kind,
            applied,
            in_transition,
            temporary_weight,
        },
    )
}
