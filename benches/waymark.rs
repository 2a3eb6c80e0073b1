use crossbeam_channel::Receiver;
use criterion::{Criterion, criterion_group, criterion_main};
use std::{hint::black_box, time::Duration};
use waymark::prelude::*;

fn click_route_reset(
    controller: &mut RouteSelectionController<StraightLineRouter>,
    results: &Receiver<RouteResult>,
) {
    controller.click(Coordinate::from((59.370_136, 18.001_749)));
    controller.click(Coordinate::from((59.335_34, 18.057_737)));
    let _ = black_box(controller.receive(results));
    controller.reset();
}

fn stale_flood(
    controller: &mut RouteSelectionController<StraightLineRouter>,
    results: &Receiver<RouteResult>,
) {
    for _ in 0..64 {
        controller.click(Coordinate::from((59.196_198, 17.628_841)));
        controller.click(Coordinate::from((59.857_834, 17.629_814)));
        controller.reset();
    }
    let _ = black_box(controller.receive(results));
}

fn criterion_benchmark(c: &mut Criterion) {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut controller = RouteSelectionController::new(StraightLineRouter::new(tx));

    let mut group = c.benchmark_group("Selection");

    group.warm_up_time(Duration::from_secs(3));

    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Click, route, reset", |b| {
        b.iter(|| click_route_reset(&mut controller, &rx))
    });

    group.bench_function("Discard 64 stale results", |b| {
        b.iter(|| stale_flood(&mut controller, &rx))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
