use std::cell::RefCell;

use waymark::prelude::*;

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<(Coordinate, Coordinate, RequestId)>>,
}

impl Recorder {
    fn tags(&self) -> Vec<RequestId> {
        self.calls.borrow().iter().map(|(_, _, tag)| *tag).collect()
    }
}

impl RoutingService for Recorder {
    fn compute_route(&self, from: Coordinate, to: Coordinate, tag: RequestId) {
        self.calls.borrow_mut().push((from, to, tag));
    }
}

fn controller() -> RouteSelectionController<Recorder> {
    RouteSelectionController::new(Recorder::default())
}

fn found(tag: RequestId, meters: f64, seconds: f64) -> RouteResult {
    RouteResult {
        tag,
        summary: RouteSummary::new(Distance::from_meters(meters), Duration::from_seconds(seconds)),
    }
}

#[test]
fn starts_idle() {
    let controller = controller();
    assert_eq!(controller.state(), SelectionState::Empty);
    assert!(controller.summary().is_none());
    assert!(controller.expected_request().is_none());
    assert!(controller.service().tags().is_empty());
}

#[test]
fn b_never_set_without_a() {
    let mut controller = controller();
    let a = Coordinate::from((1.0, 1.0));
    let b = Coordinate::from((2.0, 2.0));

    assert!(!controller.set_point_b(b));
    assert_eq!(controller.state(), SelectionState::Empty);
    assert!(controller.point_b().is_none());

    assert!(controller.set_point_a(a));
    assert!(!controller.set_point_a(b));
    assert!(controller.set_point_b(b));
    assert!(!controller.set_point_b(a));
    assert_eq!(controller.state(), SelectionState::HasAB);

    controller.reset();
    assert!(!controller.set_point_b(b));
    assert!(controller.point_a().is_none() && controller.point_b().is_none());
}

#[test]
fn request_issued_when_pair_completes() {
    let mut controller = controller();
    let a = Coordinate::from((51.0, 0.0));
    let b = Coordinate::from((52.0, 1.0));
    controller.click(a);
    assert!(controller.service().tags().is_empty());
    controller.click(b);

    let calls = controller.service().calls.borrow().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!((calls[0].0, calls[0].1), (a, b));
    assert_eq!(controller.expected_request(), Some(calls[0].2));
    let pending = controller.pending_request().unwrap();
    assert_eq!((pending.from, pending.to), (a, b));
}

#[test]
fn third_click_is_ignored() {
    let mut controller = controller();
    controller.click(Coordinate::from((1.0, 1.0)));
    controller.click(Coordinate::from((2.0, 2.0)));
    assert!(!controller.click(Coordinate::from((3.0, 3.0))));
    assert_eq!(controller.point_b(), Some(Coordinate::from((2.0, 2.0))));
    assert_eq!(controller.service().tags().len(), 1);
}

#[test]
fn reset_clears_everything() {
    let mut controller = controller();
    controller.click(Coordinate::from((1.0, 1.0)));
    controller.click(Coordinate::from((2.0, 2.0)));
    let tag = controller.service().tags()[0];
    assert!(controller.on_route_found(found(tag, 1500.0, 120.0)));
    assert!(controller.summary().is_some());

    controller.reset();
    assert_eq!(controller.state(), SelectionState::Empty);
    assert!(controller.summary().is_none());
    assert!(controller.expected_request().is_none());
}

#[test]
fn reset_twice_equals_once() {
    let mut once = controller();
    let mut twice = controller();
    for controller in [&mut once, &mut twice] {
        controller.click(Coordinate::from((1.0, 1.0)));
        controller.click(Coordinate::from((2.0, 2.0)));
    }
    once.reset();
    twice.reset();
    twice.reset();
    assert_eq!(once.state(), twice.state());
    assert_eq!(once.summary(), twice.summary());
    assert_eq!(once.expected_request(), twice.expected_request());
    assert_eq!(once.can_reset(), twice.can_reset());
}

#[test]
fn mismatched_tag_leaves_summary_alone() {
    let mut controller = controller();
    controller.click(Coordinate::from((1.0, 1.0)));
    controller.click(Coordinate::from((2.0, 2.0)));
    let tag = controller.service().tags()[0];
    let other = RequestId::new(tag.as_u64() + 100);

    assert!(!controller.on_route_found(found(other, 5.0, 5.0)));
    assert!(controller.summary().is_none());
    assert_eq!(controller.expected_request(), Some(tag));

    assert!(controller.on_route_found(found(tag, 2000.0, 300.0)));
    let accepted = *controller.summary().unwrap();
    assert!(!controller.on_route_found(found(other, 5.0, 5.0)));
    assert_eq!(controller.summary(), Some(&accepted));
}

#[test]
fn result_without_expected_is_ignored() {
    let mut controller = controller();
    assert!(!controller.on_route_found(found(RequestId::new(1), 10.0, 10.0)));
    assert!(controller.summary().is_none());
}

#[test]
fn matching_result_accepted_exactly_once() {
    let mut controller = controller();
    controller.click(Coordinate::from((1.0, 1.0)));
    controller.click(Coordinate::from((2.0, 2.0)));
    let tag = controller.service().tags()[0];

    assert!(controller.on_route_found(found(tag, 3000.0, 400.0)));
    assert!(!controller.on_route_found(found(tag, 9999.0, 9999.0)));
    assert_eq!(
        controller.summary(),
        Some(&RouteSummary::new(
            Distance::from_meters(3000.0),
            Duration::from_seconds(400.0)
        ))
    );
}

#[test]
fn late_duplicate_after_reset_is_discarded() {
    let mut controller = controller();
    controller.click(Coordinate::from((51.0, 0.0)));
    controller.click(Coordinate::from((52.0, 1.0)));
    let id1 = controller.service().tags()[0];

    assert!(controller.on_route_found(found(id1, 10_000.0, 600.0)));
    assert_eq!(
        controller.details(),
        Some(RouteDetails {
            distance: "10.00 km".into(),
            time: "10 minutes".into(),
        })
    );

    controller.reset();
    assert!(!controller.on_route_found(found(id1, 99_999.0, 600.0)));
    assert!(controller.summary().is_none());
}

#[test]
fn result_after_immediate_reset_is_stale() {
    let mut controller = controller();
    controller.click(Coordinate::from((1.0, 1.0)));
    controller.click(Coordinate::from((2.0, 2.0)));
    let id1 = controller.service().tags()[0];
    controller.reset();

    assert!(!controller.on_route_found(found(id1, 500.0, 60.0)));
    assert!(controller.summary().is_none());
    assert_eq!(controller.state(), SelectionState::Empty);
}

#[test]
fn second_point_a_is_ignored() {
    let mut controller = controller();
    controller.set_point_a(Coordinate::from((10.0, 10.0)));
    assert!(!controller.set_point_a(Coordinate::from((20.0, 20.0))));
    assert_eq!(controller.point_a(), Some(Coordinate::from((10.0, 10.0))));
}

#[test]
fn old_request_stale_after_new_pair() {
    let mut controller = controller();
    controller.click(Coordinate::from((1.0, 1.0)));
    controller.click(Coordinate::from((2.0, 2.0)));
    controller.reset();
    controller.click(Coordinate::from((3.0, 3.0)));
    controller.click(Coordinate::from((4.0, 4.0)));
    let tags = controller.service().tags();
    assert_eq!(tags.len(), 2);
    assert_ne!(tags[0], tags[1]);

    assert!(!controller.on_route_found(found(tags[0], 1.0, 1.0)));
    assert!(controller.summary().is_none());
    assert!(controller.on_route_found(found(tags[1], 2.0, 2.0)));
    assert_eq!(controller.summary().unwrap().distance, Distance::from_meters(2.0));
}

#[test]
fn prompt_and_gating_track_selection() {
    let mut controller = controller();
    assert_eq!(controller.prompt(), Prompt::PickA);
    assert!(controller.can_locate());
    assert!(!controller.can_reset());

    controller.click(Coordinate::from((1.0, 1.0)));
    assert_eq!(controller.prompt(), Prompt::PickB);
    assert!(!controller.can_locate());
    assert!(controller.can_reset());

    controller.click(Coordinate::from((2.0, 2.0)));
    assert_eq!(controller.prompt(), Prompt::None);
    assert_eq!(controller.prompt().to_string(), "");
    assert!(controller.can_reset());
}
