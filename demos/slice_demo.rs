//! Slice demo
//!
//! Builds a random swirling particle cloud, sweeps the brush plane through
//! it and prints the final slice as SVG on stdout.
//!
//! ```text
//! RUST_LOG=debug cargo run --example slice_demo [config.json] > slice.svg
//! ```

use anyhow::Context;
use cgmath::Vector3;
use rand::Rng;
use sliceview::prelude::*;

const PARTICLE_COUNT: u64 = 20_000;

fn generate_cloud(rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|id| {
            let position: Vector3<f64> = Vector3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(0.0..2.0),
            );
            // Swirl around the z axis, rising slowly
            let velocity = Vector3::new(-position.y, position.x, 0.1 * position.z);
            let r2 = position.x * position.x + position.y * position.y;
            let concentration = (-3.0 * r2).exp() * rng.random_range(0.5..1.0);
            Particle::new(id, position, velocity, concentration)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::load(&path)
            .with_context(|| format!("loading render config from {}", path))?,
        None => RenderConfig::default().with_threshold_ratio(0.2),
    };

    let particles = generate_cloud(&mut rand::rng());
    let bounds = Bounds::from_particles(&particles).context("empty particle cloud")?;
    let canvas = Canvas::new(600.0, 600.0);

    let mut view = SliceView::new(config);
    view.set_bounds(bounds);
    view.set_particles(particles);
    view.set_canvas(canvas);
    view.set_brush(BrushConfig::new(Axis::Z, 0.0, 0.05));

    let mut shapes = ShapeSet::new();
    let mut monitor = StatsMonitor::new();

    for step in 0..=10 {
        view.set_brushed_coord(step as f64 * 0.2);
        if let Some(summary) = view.render_into(&mut shapes) {
            log::info!(
                "z = {:.1}: {} glyphs (+{} ~{} -{})",
                step as f64 * 0.2,
                shapes.len(),
                summary.created,
                summary.updated,
                summary.removed
            );
        }
        if let Some(stats) = view.last_stats() {
            monitor.record(stats);
        }
    }

    log::info!(
        "{} cycles, avg {:?}, max {:?}, {} truncated",
        monitor.cycle_count(),
        monitor.average_cycle_time(),
        monitor.max_cycle_time(),
        monitor.truncated_count()
    );

    print!("{}", shapes.to_svg(canvas));
    Ok(())
}
