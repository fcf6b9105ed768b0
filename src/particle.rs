//! Particle records and dataset extents
//!
//! A [`Particle`] is an immutable snapshot for one render cycle. Its
//! [`ParticleId`] is the only thing that ties a drawn glyph back to it
//! across cycles.

use crate::visualization::axis::Axis;
use cgmath::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, opaque particle identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ParticleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One particle of the 3D field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: ParticleId,
    #[serde(with = "vec3_array")]
    pub position: Vector3<f64>,
    #[serde(with = "vec3_array")]
    pub velocity: Vector3<f64>,
    /// Scalar concentration, expected to be non-negative
    pub concentration: f64,
}

impl Particle {
    /// Create a new particle
    pub fn new(id: u64, position: Vector3<f64>, velocity: Vector3<f64>, concentration: f64) -> Self {
        Self {
            id: ParticleId(id),
            position,
            velocity,
            concentration,
        }
    }

    /// Position component along an axis
    pub fn position_component(&self, axis: Axis) -> f64 {
        self.position[axis.index()]
    }

    /// Velocity component along an axis
    pub fn velocity_component(&self, axis: Axis) -> f64 {
        self.velocity[axis.index()]
    }
}

/// Spatial and concentration extents of the full dataset.
///
/// Supplied by the host. Position scaling always uses these full-dataset
/// extents, never the extents of the filtered subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
    pub max_c: f64,
}

impl Bounds {
    /// Compute extents over a whole dataset.
    ///
    /// Returns `None` for an empty dataset.
    pub fn from_particles(particles: &[Particle]) -> Option<Self> {
        let first = particles.first()?;
        let mut bounds = Self {
            min_x: first.position.x,
            max_x: first.position.x,
            min_y: first.position.y,
            max_y: first.position.y,
            min_z: first.position.z,
            max_z: first.position.z,
            max_c: first.concentration,
        };

        for p in &particles[1..] {
            bounds.min_x = bounds.min_x.min(p.position.x);
            bounds.max_x = bounds.max_x.max(p.position.x);
            bounds.min_y = bounds.min_y.min(p.position.y);
            bounds.max_y = bounds.max_y.max(p.position.y);
            bounds.min_z = bounds.min_z.min(p.position.z);
            bounds.max_z = bounds.max_z.max(p.position.z);
            bounds.max_c = bounds.max_c.max(p.concentration);
        }

        Some(bounds)
    }

    /// `[min, max]` extent along a spatial axis
    pub fn extent(&self, axis: Axis) -> [f64; 2] {
        match axis {
            Axis::X => [self.min_x, self.max_x],
            Axis::Y => [self.min_y, self.max_y],
            Axis::Z => [self.min_z, self.max_z],
        }
    }
}

/// Serialize `Vector3<f64>` as a plain `[x, y, z]` array
mod vec3_array {
    use cgmath::Vector3;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Vector3<f64>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq([v.x, v.y, v.z])
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vector3<f64>, D::Error> {
        let [x, y, z] = <[f64; 3]>::deserialize(d)?;
        Ok(Vector3::new(x, y, z))
    }
}
