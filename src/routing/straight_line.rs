use crossbeam_channel::Sender;
use tracing::warn;

use crate::{
    routing::{RequestId, RouteResult, RouteSummary, RoutingService},
    shared::{geo::Coordinate, time::Duration},
};

pub const DEFAULT_DRIVING_SPEED_KMH: f64 = 50.0;

/// Offline estimate: great-circle distance stretched by the circuity factor,
/// driven at a constant average speed. Results are sent before
/// `compute_route` returns.
#[derive(Debug, Clone)]
pub struct StraightLineRouter {
    speed_kmh: f64,
    results: Sender<RouteResult>,
}

impl StraightLineRouter {
    pub fn new(results: Sender<RouteResult>) -> Self {
        Self {
            speed_kmh: DEFAULT_DRIVING_SPEED_KMH,
            results,
        }
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    pub fn estimate(&self, from: &Coordinate, to: &Coordinate) -> RouteSummary {
        let distance = from.network_distance(to);
        let hours = if self.speed_kmh > 0.0 {
            distance.as_kilometers() / self.speed_kmh
        } else {
            0.0
        };
        RouteSummary::new(distance, Duration::from_hours(hours))
    }
}

impl RoutingService for StraightLineRouter {
    fn compute_route(&self, from: Coordinate, to: Coordinate, tag: RequestId) {
        let summary = self.estimate(&from, &to);
        if self.results.send(RouteResult { tag, summary }).is_err() {
            warn!(request = %tag, "route result receiver dropped");
        }
    }
}

#[test]
fn delivers_before_returning() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let router = StraightLineRouter::new(tx).with_speed(60.0);
    router.compute_route(
        Coordinate::from((51.0, 0.0)),
        Coordinate::from((52.0, 1.0)),
        RequestId::new(3),
    );
    let result = rx.try_recv().unwrap();
    assert_eq!(result.tag, RequestId::new(3));
    let km = result.summary.distance.as_kilometers();
    assert!((result.summary.duration.as_seconds() - km / 60.0 * 3600.0).abs() < 1e-6);
}

#[test]
fn zero_speed_gives_zero_duration() {
    let (tx, _rx) = crossbeam_channel::unbounded();
    let router = StraightLineRouter::new(tx).with_speed(0.0);
    let summary = router.estimate(&Coordinate::from((0.0, 0.0)), &Coordinate::from((0.0, 1.0)));
    assert_eq!(summary.duration, Duration::from_seconds(0.0));
}
