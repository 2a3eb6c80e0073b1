use tracing::{debug, info, trace};

use crate::{
    routing::{RequestId, RouteRequest, RouteResult, RouteSummary, RoutingService},
    shared::geo::Coordinate,
};

/// Decides which route result, if any, is still wanted.
///
/// The pending request doubles as the expected identifier: a result is only
/// accepted when its tag matches the pending request, and accepting it clears
/// the pending slot so a second delivery of the same tag is discarded.
#[derive(Debug, Default)]
pub struct Coordinator {
    generation: u64,
    pending: Option<RouteRequest>,
}

impl Coordinator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn expected(&self) -> Option<RequestId> {
        self.pending.as_ref().map(|request| request.id)
    }

    pub fn pending(&self) -> Option<&RouteRequest> {
        self.pending.as_ref()
    }

    /// Issues a fresh request and hands it to the routing service.
    /// The new id is recorded as expected before the service is called.
    pub fn request<S>(&mut self, service: &S, from: Coordinate, to: Coordinate) -> RequestId
    where
        S: RoutingService + ?Sized,
    {
        self.generation += 1;
        let id = RequestId::new(self.generation);
        if let Some(previous) = self.pending.replace(RouteRequest::new(id, from, to)) {
            debug!(superseded = %previous.id, by = %id, "route request superseded");
        }
        trace!(request = %id, %from, %to, "requesting route");
        service.compute_route(from, to, id);
        id
    }

    /// Drops the expected id. Anything still in flight becomes stale.
    pub fn invalidate(&mut self) -> Option<RequestId> {
        let dropped = self.pending.take().map(|request| request.id);
        if let Some(id) = dropped {
            debug!(request = %id, "route request invalidated");
        }
        dropped
    }

    /// Returns the summary when `result` answers the expected request.
    pub fn settle(&mut self, result: RouteResult) -> Option<RouteSummary> {
        match self.expected() {
            Some(expected) if expected == result.tag => {
                self.pending = None;
                info!(
                    request = %result.tag,
                    distance_m = result.summary.distance.as_meters(),
                    duration_s = result.summary.duration.as_seconds(),
                    "route accepted"
                );
                Some(result.summary)
            }
            expected => {
                debug!(
                    request = %result.tag,
                    expected = ?expected.map(|id| id.as_u64()),
                    "discarding stale route result"
                );
                None
            }
        }
    }
}
