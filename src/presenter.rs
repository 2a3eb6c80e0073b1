//! Holds the accepted route summary and turns it into display strings.

use serde::Serialize;

use crate::{
    routing::RouteSummary,
    shared::{geo::Distance, time::Duration},
};

/// Formatted distance and time, ready to show next to the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDetails {
    pub distance: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPresenter {
    summary: Option<RouteSummary>,
}

impl ResultPresenter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn summary(&self) -> Option<&RouteSummary> {
        self.summary.as_ref()
    }

    pub fn details(&self) -> Option<RouteDetails> {
        self.summary.as_ref().map(|summary| RouteDetails {
            distance: format_distance(summary.distance),
            time: format_duration(summary.duration),
        })
    }

    pub(crate) fn show(&mut self, summary: RouteSummary) {
        self.summary = Some(summary);
    }

    pub(crate) fn clear(&mut self) {
        self.summary = None;
    }
}

pub fn format_distance(distance: Distance) -> String {
    if distance.as_meters() < 1000.0 {
        format!("{:.0} meters", distance.as_meters())
    } else {
        format!("{:.2} km", distance.as_kilometers())
    }
}

pub fn format_duration(duration: Duration) -> String {
    let (hours, minutes) = duration.to_hours_minutes();
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes} minutes")
    }
}

#[test]
fn short_distance_in_meters() {
    assert_eq!(format_distance(Distance::from_meters(999.4)), "999 meters");
    assert_eq!(format_distance(Distance::from_meters(0.0)), "0 meters");
}

#[test]
fn long_distance_in_kilometers() {
    assert_eq!(format_distance(Distance::from_meters(1000.0)), "1.00 km");
    assert_eq!(format_distance(Distance::from_meters(10_000.0)), "10.00 km");
    assert_eq!(format_distance(Distance::from_meters(12_346.0)), "12.35 km");
}

#[test]
fn duration_formats() {
    assert_eq!(format_duration(Duration::from_seconds(600.0)), "10 minutes");
    assert_eq!(format_duration(Duration::from_seconds(59.0)), "0 minutes");
    assert_eq!(format_duration(Duration::from_seconds(3600.0)), "1h 0m");
    assert_eq!(format_duration(Duration::from_seconds(5430.0)), "1h 30m");
}

#[test]
fn details_follow_summary() {
    let mut presenter = ResultPresenter::new();
    assert!(presenter.details().is_none());
    presenter.show(RouteSummary::new(
        Distance::from_meters(10_000.0),
        Duration::from_seconds(600.0),
    ));
    assert_eq!(
        presenter.details(),
        Some(RouteDetails {
            distance: "10.00 km".into(),
            time: "10 minutes".into(),
        })
    );
    presenter.clear();
    assert!(presenter.summary().is_none());
}
