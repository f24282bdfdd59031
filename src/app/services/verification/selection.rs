//! Choosing the forecast that applies to an observation

use crate::app::models::{ReportTime, TafReport, time::hours_between};
use tracing::debug;

/// The forecast chosen for an observation
#[derive(Debug, Clone, Copy)]
pub struct SelectedForecast<'a> {
    /// Position in the forecast slice
    pub index: usize,
    pub forecast: &'a TafReport,
    /// Hours from issue to observation; `None` when the issue time is unknown
    pub lead_time_hours: Option<f64>,
}

/// Whether `forecast` is a candidate for an observation at `station` and `time`
///
/// The forecast must be for the same station, must not be cancelled, and
/// its validity period must contain the observation hour.
pub fn is_applicable(forecast: &TafReport, station: &str, time: ReportTime) -> bool {
    forecast.station.as_deref() == Some(station)
        && !forecast.cancelled
        && forecast
            .validity
            .is_some_and(|validity| validity.contains(time))
}

/// Pick the most recently issued applicable forecast
///
/// Recency is measured as the lead time to the observation. Forecasts with
/// no issue time rank as the oldest, and ties keep the earlier forecast in
/// the slice so the choice is stable.
pub fn select_forecast<'a>(
    station: &str,
    time: ReportTime,
    forecasts: &'a [TafReport],
) -> Option<SelectedForecast<'a>> {
    let mut best: Option<SelectedForecast<'a>> = None;

    for (index, forecast) in forecasts.iter().enumerate() {
        if !is_applicable(forecast, station, time) {
            continue;
        }

        let lead_time_hours = forecast
            .issue_time
            .map(|issued| hours_between(issued, time));
        let rank = lead_time_hours.unwrap_or(f64::INFINITY);

        let better = match &best {
            Some(current) => rank < current.lead_time_hours.unwrap_or(f64::INFINITY),
            None => true,
        };
        if better {
            best = Some(SelectedForecast {
                index,
                forecast,
                lead_time_hours,
            });
        }
    }

    match &best {
        Some(selected) => debug!(
            "Selected forecast #{} for {} at {} (lead {:?} h)",
            selected.index, station, time, selected.lead_time_hours
        ),
        None => debug!(
            "No forecast among {} valid for {} at {}",
            forecasts.len(),
            station,
            time
        ),
    }

    best
}
