//! Benchmarks for the tick pipeline and input handling.
//!
//! Run with: `cargo bench`

use ballsim::{ArenaBounds, ForceMode, InputEvent, Material, Simulation, Vector2};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Rubber never settles: its rebounds keep the ball above the sleep
// threshold for the whole measurement.
fn bouncing_sim(mode: ForceMode) -> Simulation {
    let mut sim = Simulation::new();
    sim.handle_input(InputEvent::MaterialSelect(Material::rubber()));
    if mode != ForceMode::None {
        sim.handle_input(InputEvent::ModeToggle(mode));
    }
    sim.get_ball_mut().set_position(Vector2::new(180.0, 60.0));
    sim.get_ball_mut().set_velocity(Vector2::new(9.0, 7.0));
    sim
}

fn bench_advance(c: &mut Criterion) {
    let bounds = ArenaBounds::new(400.0, 300.0);
    let mut group = c.benchmark_group("advance");

    group.bench_function("coasting", |b| {
        let mut sim = bouncing_sim(ForceMode::None);
        b.iter(|| {
            let snapshot = sim.advance(bounds);
            sim.get_events_mut().clear();
            black_box(snapshot)
        })
    });

    group.bench_function("gravity", |b| {
        let mut sim = bouncing_sim(ForceMode::Gravity);
        b.iter(|| {
            let snapshot = sim.advance(bounds);
            sim.get_events_mut().clear();
            black_box(snapshot)
        })
    });

    group.bench_function("magnet", |b| {
        let mut sim = bouncing_sim(ForceMode::MagneticAttract);
        sim.handle_input(InputEvent::PointerMove(Vector2::new(200.0, 150.0)));
        b.iter(|| {
            let snapshot = sim.advance(bounds);
            sim.get_events_mut().clear();
            black_box(snapshot)
        })
    });

    group.finish();
}

fn bench_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("input");

    group.bench_function("drag_cycle", |b| {
        let mut sim = Simulation::new();
        b.iter(|| {
            // Material select resets the ball, so the grab always lands
            sim.handle_input(InputEvent::MaterialSelect(Material::plastic()));
            sim.handle_input(InputEvent::PointerDown(Vector2::new(75.0, 75.0)));
            sim.handle_input(InputEvent::PointerMove(Vector2::new(95.0, 85.0)));
            sim.handle_input(InputEvent::PointerUp);
            black_box(sim.snapshot())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_input);
criterion_main!(benches);
