pub mod config;
pub mod controller;
pub mod presenter;
pub mod routing;
pub mod selection;
pub mod shared;

pub mod prelude {
    pub use crate::config::MapConfig;
    pub use crate::controller::{LocateError, Prompt, RouteSelectionController};
    pub use crate::presenter::{ResultPresenter, RouteDetails};
    pub use crate::routing::{
        RequestId, RouteRequest, RouteResult, RouteSummary, RoutingService, StraightLineRouter,
    };
    pub use crate::selection::SelectionState;
    pub use crate::shared::{Coordinate, Distance, Duration};
}
