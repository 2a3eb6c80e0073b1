use std::sync::Arc;

use crossbeam_channel::{Receiver, TryRecvError};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, info};
use waymark::prelude::*;

use crate::osrm::OsrmRouter;

const PUMP_INTERVAL: std::time::Duration = std::time::Duration::from_millis(20);

pub enum RouteBackend {
    Osrm(OsrmRouter),
    StraightLine(StraightLineRouter),
}

impl RoutingService for RouteBackend {
    fn compute_route(&self, from: Coordinate, to: Coordinate, tag: RequestId) {
        match self {
            RouteBackend::Osrm(router) => router.compute_route(from, to, tag),
            RouteBackend::StraightLine(router) => router.compute_route(from, to, tag),
        }
    }
}

pub struct AppState {
    pub map: MapConfig,
    pub controller: Mutex<RouteSelectionController<RouteBackend>>,
}

impl AppState {
    pub fn new(map: MapConfig, backend: RouteBackend) -> Self {
        Self {
            map,
            controller: Mutex::new(RouteSelectionController::new(backend)),
        }
    }
}

/// Applies route results under the same lock the handlers take. Holds only
/// a weak reference and ends once the state or the channel is gone.
pub fn spawn_result_pump(state: &Arc<AppState>, results: Receiver<RouteResult>) -> JoinHandle<()> {
    let state = Arc::downgrade(state);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PUMP_INTERVAL);
        loop {
            ticker.tick().await;
            let Some(app) = state.upgrade() else {
                break;
            };
            let mut controller = app.controller.lock().await;
            loop {
                match results.try_recv() {
                    Ok(result) => {
                        let accepted = controller.on_route_found(result);
                        debug!(request = %result.tag, accepted, "route result applied");
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        info!("Route result channel closed");
                        return;
                    }
                }
            }
        }
        info!("Application state dropped, result pump stopped");
    })
}
