mod coordinator;
mod request;
mod straight_line;

pub use coordinator::*;
pub use request::*;
pub use straight_line::*;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::shared::{geo::Coordinate, geo::Distance, time::Duration};

/// Distance and travel time of a computed route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance: Distance,
    pub duration: Duration,
}

impl RouteSummary {
    pub const fn new(distance: Distance, duration: Duration) -> Self {
        Self { distance, duration }
    }
}

/// What a routing service delivers back: the summary plus the tag it was given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub tag: RequestId,
    pub summary: RouteSummary,
}

/// An external route computation.
///
/// `compute_route` must return without waiting for the route. Implementations
/// deliver a [`RouteResult`] carrying the same `tag` through their own channel,
/// or never deliver anything when the computation fails.
pub trait RoutingService {
    fn compute_route(&self, from: Coordinate, to: Coordinate, tag: RequestId);
}

impl<S: RoutingService + ?Sized> RoutingService for Arc<S> {
    fn compute_route(&self, from: Coordinate, to: Coordinate, tag: RequestId) {
        (**self).compute_route(from, to, tag)
    }
}

impl<S: RoutingService + ?Sized> RoutingService for Box<S> {
    fn compute_route(&self, from: Coordinate, to: Coordinate, tag: RequestId) {
        (**self).compute_route(from, to, tag)
    }
}
