/*
 * Particle Field Benchmark
 *
 * Measures one particle system tick at a few grid densities, and a full
 * simulation frame with an active pulse.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use std::time::Duration;

use gesture_field::{
    ColorShift, Damping, Distortion, FrameSnapshot, Homing, JointType, ParticleSystem, Settings, Simulation,
    SimulationParams, Skeleton,
};

fn field(interval: f32) -> ParticleSystem {
    let mut system = ParticleSystem::with_grid(1024.0, 768.0, interval, 2.0, 10.0);
    system.add_behavior(Homing::new(0.175));
    system.add_behavior(Damping::new(0.95));
    let mut distortion = Distortion::new(vec3(512.0, 384.0, 0.0), 1000.0, 0.95);
    distortion.magnitude = 100.0;
    system.add_behavior(distortion);
    system.add_behavior(ColorShift);
    system
}

// Benchmark a single tick at different grid spacings
fn bench_system_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("system_update");

    for interval in [16.0_f32, 8.0, 4.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(interval), interval, |b, &interval| {
            let mut system = field(interval);
            b.iter(|| {
                system.update(black_box(1.0));
            });
        });
    }

    group.finish();
}

// Benchmark a whole frame with the hand sweeping across the surface
fn bench_simulation_frame(c: &mut Criterion) {
    let params = SimulationParams::default();
    let mut sim = Simulation::new(&Settings::default(), &params);
    let mut x = 0.0_f32;

    c.bench_function("simulation_frame", |b| {
        b.iter(|| {
            x = (x + 37.0) % 1024.0;
            let skeleton = Skeleton::new().with_joint(JointType::HandLeft, vec3(x, 384.0, 0.0));
            let snapshot = FrameSnapshot::new(vec![skeleton]);
            black_box(sim.step(Some(snapshot), params.time_step));
        });
    });
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_system_update, bench_simulation_frame
}

criterion_main!(benches);
