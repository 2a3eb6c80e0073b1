use std::cell::Cell;

use waymark::prelude::*;

#[derive(Default)]
struct CountingService {
    calls: Cell<usize>,
}

impl RoutingService for CountingService {
    fn compute_route(&self, _from: Coordinate, _to: Coordinate, _tag: RequestId) {
        self.calls.set(self.calls.get() + 1);
    }
}

fn controller() -> RouteSelectionController<CountingService> {
    RouteSelectionController::new(CountingService::default())
}

#[test]
fn located_position_becomes_a() {
    let mut controller = controller();
    assert!(controller.begin_locating());
    assert!(controller.is_locating());
    assert!(!controller.can_locate());

    let here = Coordinate::from((59.37, 18.0));
    assert!(controller.finish_locating(Ok(here)));
    assert!(!controller.is_locating());
    assert_eq!(controller.point_a(), Some(here));
    assert_eq!(controller.state(), SelectionState::HasA);
    assert_eq!(controller.service().calls.get(), 0);
}

#[test]
fn failed_lookup_keeps_points() {
    let mut controller = controller();
    controller.begin_locating();
    assert!(!controller.finish_locating(Err(LocateError::PermissionDenied)));
    assert_eq!(controller.state(), SelectionState::Empty);
    assert_eq!(controller.locate_error(), Some(LocateError::PermissionDenied));
    assert!(controller.can_locate());
    assert!(
        controller
            .locate_error()
            .unwrap()
            .to_string()
            .starts_with("Could not get your location")
    );
}

#[test]
fn locate_refused_once_a_is_set() {
    let mut controller = controller();
    controller.click(Coordinate::from((1.0, 1.0)));
    assert!(!controller.begin_locating());
    assert!(!controller.is_locating());
}

#[test]
fn late_position_does_not_replace_clicked_a() {
    let mut controller = controller();
    controller.begin_locating();
    controller.click(Coordinate::from((1.0, 1.0)));
    assert!(!controller.finish_locating(Ok(Coordinate::from((9.0, 9.0)))));
    assert_eq!(controller.point_a(), Some(Coordinate::from((1.0, 1.0))));
    assert!(!controller.is_locating());
}

#[test]
fn located_a_then_click_b_requests_route() {
    let mut controller = controller();
    controller.begin_locating();
    controller.finish_locating(Ok(Coordinate::from((1.0, 1.0))));
    controller.click(Coordinate::from((2.0, 2.0)));
    assert_eq!(controller.state(), SelectionState::HasAB);
    assert_eq!(controller.service().calls.get(), 1);
    assert!(controller.expected_request().is_some());
}
