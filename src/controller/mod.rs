mod locate;
pub use locate::*;

use std::fmt::Display;

use crossbeam_channel::Receiver;
use serde::Serialize;
use tracing::debug;

use crate::{
    presenter::{ResultPresenter, RouteDetails},
    routing::{Coordinator, RequestId, RouteRequest, RouteResult, RouteSummary, RoutingService},
    selection::{PointStore, SelectionState},
    shared::geo::Coordinate,
};

/// What the user should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    PickA,
    PickB,
    None,
}

impl Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prompt::PickA => {
                f.write_str("1. Click the map to set Point A, or use your current location.")
            }
            Prompt::PickB => f.write_str("2. Click the map to set Point B."),
            Prompt::None => Ok(()),
        }
    }
}

/// Ties point selection, route requests and the displayed result together.
///
/// Every mutation takes `&mut self` and finishes before returning, so a route
/// result handed to [`on_route_found`](Self::on_route_found) after a reset is
/// always judged against the post-reset state.
pub struct RouteSelectionController<S> {
    points: PointStore,
    coordinator: Coordinator,
    presenter: ResultPresenter,
    locator: Locator,
    service: S,
}

impl<S: RoutingService> RouteSelectionController<S> {
    pub fn new(service: S) -> Self {
        Self {
            points: PointStore::new(),
            coordinator: Coordinator::new(),
            presenter: ResultPresenter::new(),
            locator: Locator::default(),
            service,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn state(&self) -> SelectionState {
        self.points.state()
    }

    pub fn point_a(&self) -> Option<Coordinate> {
        self.points.point_a()
    }

    pub fn point_b(&self) -> Option<Coordinate> {
        self.points.point_b()
    }

    pub fn summary(&self) -> Option<&RouteSummary> {
        self.presenter.summary()
    }

    pub fn details(&self) -> Option<RouteDetails> {
        self.presenter.details()
    }

    pub fn expected_request(&self) -> Option<RequestId> {
        self.coordinator.expected()
    }

    /// The request still waiting for an answer, if any.
    pub fn pending_request(&self) -> Option<&RouteRequest> {
        self.coordinator.pending()
    }

    /// A map click fills A, then B, and is ignored once both are set.
    pub fn click(&mut self, coordinate: Coordinate) -> bool {
        match self.points.state() {
            SelectionState::Empty => self.set_point_a(coordinate),
            SelectionState::HasA => self.set_point_b(coordinate),
            SelectionState::HasAB => {
                debug!(%coordinate, "click ignored, both points set");
                false
            }
        }
    }

    pub fn set_point_a(&mut self, coordinate: Coordinate) -> bool {
        if !self.points.set_a(coordinate) {
            debug!(%coordinate, "point A already set");
            return false;
        }
        self.coordinator.invalidate();
        self.presenter.clear();
        self.request_route();
        true
    }

    pub fn set_point_b(&mut self, coordinate: Coordinate) -> bool {
        if !self.points.set_b(coordinate) {
            debug!(%coordinate, state = ?self.points.state(), "point B rejected");
            return false;
        }
        self.presenter.clear();
        self.request_route();
        true
    }

    /// Clears everything. The expected id goes first.
    pub fn reset(&mut self) {
        self.coordinator.invalidate();
        self.points.clear();
        self.presenter.clear();
    }

    /// Returns `true` when the result answered the live request.
    pub fn on_route_found(&mut self, result: RouteResult) -> bool {
        match self.coordinator.settle(result) {
            Some(summary) => {
                self.presenter.show(summary);
                true
            }
            None => false,
        }
    }

    /// Applies every result already waiting on `results`, in arrival order.
    /// Returns how many were accepted.
    pub fn receive(&mut self, results: &Receiver<RouteResult>) -> usize {
        results
            .try_iter()
            .filter(|result| self.on_route_found(*result))
            .count()
    }

    pub fn prompt(&self) -> Prompt {
        match self.points.state() {
            SelectionState::Empty => Prompt::PickA,
            SelectionState::HasA => Prompt::PickB,
            SelectionState::HasAB => Prompt::None,
        }
    }

    pub fn can_locate(&self) -> bool {
        !self.locator.is_locating() && self.points.point_a().is_none()
    }

    pub fn can_reset(&self) -> bool {
        !self.points.state().is_empty()
    }

    pub fn is_locating(&self) -> bool {
        self.locator.is_locating()
    }

    pub fn locate_error(&self) -> Option<LocateError> {
        self.locator.last_error()
    }

    pub fn begin_locating(&mut self) -> bool {
        if self.points.point_a().is_some() {
            debug!("locate refused, point A already set");
            return false;
        }
        self.locator.begin()
    }

    /// Feeds a geolocation outcome in. A found position becomes point A
    /// unless A was set in the meantime.
    pub fn finish_locating(&mut self, outcome: Result<Coordinate, LocateError>) -> bool {
        match self.locator.finish(outcome) {
            Some(coordinate) => self.set_point_a(coordinate),
            None => false,
        }
    }

    fn request_route(&mut self) {
        if let Some((from, to)) = self.points.pair() {
            self.coordinator.request(&self.service, from, to);
        }
    }
}
