use serde::{Deserialize, Serialize};
use waymark::prelude::*;

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CoordinateDto {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LocateFailedDto {
    pub code: u16,
}

#[derive(Clone, Debug, Serialize)]
pub struct PendingDto {
    pub id: RequestId,
    pub waiting_ms: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SelectionDto {
    pub state: SelectionState,
    pub point_a: Option<Coordinate>,
    pub point_b: Option<Coordinate>,
    pub pending: Option<PendingDto>,
    pub summary: Option<RouteSummary>,
    pub details: Option<RouteDetails>,
    pub prompt: Prompt,
    pub instructions: String,
    pub can_locate: bool,
    pub can_reset: bool,
    pub is_locating: bool,
    pub locate_error: Option<String>,
}

impl SelectionDto {
    pub fn from<S: RoutingService>(controller: &RouteSelectionController<S>) -> Self {
        Self {
            state: controller.state(),
            point_a: controller.point_a(),
            point_b: controller.point_b(),
            pending: controller.pending_request().map(|request| PendingDto {
                id: request.id,
                waiting_ms: request.waiting().num_milliseconds(),
            }),
            summary: controller.summary().copied(),
            details: controller.details(),
            prompt: controller.prompt(),
            instructions: controller.prompt().to_string(),
            can_locate: controller.can_locate(),
            can_reset: controller.can_reset(),
            is_locating: controller.is_locating(),
            locate_error: controller.locate_error().map(|err| err.to_string()),
        }
    }
}
