//! Brushed slab selection
//!
//! A particle is in-band when `|brushed_coord - coord(p)| < thickness`.
//! The signed distance is kept alongside each survivor because the density
//! limiter orders by it later.

use super::axis::Axis;
use crate::particle::Particle;
use std::fmt;
use std::sync::Arc;

/// How the brushed coordinate is read from a particle
#[derive(Clone, Default)]
pub enum CoordGetter {
    /// Position component of the brushed axis
    #[default]
    Axis,
    /// Host-supplied getter
    Custom(Arc<dyn Fn(&Particle) -> f64 + Send + Sync>),
}

impl fmt::Debug for CoordGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordGetter::Axis => write!(f, "CoordGetter::Axis"),
            CoordGetter::Custom(_) => write!(f, "CoordGetter::Custom(..)"),
        }
    }
}

/// The active slab
#[derive(Debug, Clone)]
pub struct BrushConfig {
    pub axis: Axis,
    pub brushed_coord: f64,
    pub thickness: f64,
    pub getter: CoordGetter,
}

impl BrushConfig {
    /// Brush along `axis` reading the particle's position on that axis
    pub fn new(axis: Axis, brushed_coord: f64, thickness: f64) -> Self {
        Self {
            axis,
            brushed_coord,
            thickness,
            getter: CoordGetter::Axis,
        }
    }

    /// Replace the coordinate getter
    pub fn with_getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&Particle) -> f64 + Send + Sync + 'static,
    {
        self.getter = CoordGetter::Custom(Arc::new(getter));
        self
    }

    /// Brushed coordinate of a particle
    pub fn coord(&self, particle: &Particle) -> f64 {
        match &self.getter {
            CoordGetter::Axis => particle.position_component(self.axis),
            CoordGetter::Custom(getter) => getter(particle),
        }
    }

    /// Signed distance from the brush plane
    pub fn distance(&self, particle: &Particle) -> f64 {
        self.brushed_coord - self.coord(particle)
    }

    /// Whether the particle lies strictly inside the slab
    pub fn contains(&self, particle: &Particle) -> bool {
        self.distance(particle).abs() < self.thickness
    }
}

/// A particle that survived brushing, with its signed plane distance
#[derive(Debug, Clone, Copy)]
pub struct Brushed<'a> {
    pub particle: &'a Particle,
    pub distance: f64,
}

/// Filter particles to the brushed slab, preserving input order.
pub fn select_brushed<'a>(particles: &'a [Particle], brush: &BrushConfig) -> Vec<Brushed<'a>> {
    if !(brush.thickness > 0.0) {
        return Vec::new();
    }

    particles
        .iter()
        .filter_map(|particle| {
            let distance = brush.distance(particle);
            (distance.abs() < brush.thickness).then_some(Brushed { particle, distance })
        })
        .collect()
}
