//! Axis selection for the slice plane
//!
//! Position projection, velocity projection and scale-domain selection all
//! pick "two of three" components depending on the brushed axis. They share
//! one [`AxisProjector`] so the three-way branch only exists here.

use crate::particle::{Bounds, Particle};
use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// Brushed axis; the slice plane is perpendicular to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Get all axes
    pub fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }

    /// Component index of this axis
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Which in-plane components are drawn for each axis.
///
/// `Observed` reproduces the slice view as it has always been drawn,
/// including the y-axis vertical extent taken from the Z bounds and the
/// y/z component pairs. `Orthogonal` picks the two components actually
/// perpendicular to the brushed axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Observed,
    Orthogonal,
}

/// Maps an axis to the (horizontal, vertical) component pair and the
/// (horizontal, vertical) bounds domains used on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisProjector {
    components: [Axis; 2],
    domains: [Axis; 2],
}

impl AxisProjector {
    /// Build the projector for an axis
    pub fn new(axis: Axis, mode: ProjectionMode) -> Self {
        use Axis::{X, Y, Z};
        let (components, domains) = match (mode, axis) {
            (ProjectionMode::Observed, X) => ([Y, Z], [Z, Y]),
            (ProjectionMode::Observed, Y) => ([X, Y], [X, Z]),
            (ProjectionMode::Observed, Z) => ([X, Y], [X, Y]),
            (ProjectionMode::Orthogonal, X) => ([Y, Z], [Y, Z]),
            (ProjectionMode::Orthogonal, Y) => ([X, Z], [X, Z]),
            (ProjectionMode::Orthogonal, Z) => ([X, Y], [X, Y]),
        };
        Self {
            components,
            domains,
        }
    }

    /// Component axes `(horizontal, vertical)`
    pub fn components(&self) -> [Axis; 2] {
        self.components
    }

    /// Select the in-plane pair from any 3-vector
    pub fn select(&self, v: &Vector3<f64>) -> (f64, f64) {
        (v[self.components[0].index()], v[self.components[1].index()])
    }

    /// In-plane position of a particle
    pub fn position(&self, particle: &Particle) -> (f64, f64) {
        self.select(&particle.position)
    }

    /// In-plane velocity of a particle
    pub fn velocity(&self, particle: &Particle) -> (f64, f64) {
        self.select(&particle.velocity)
    }

    /// Bounds extents for the horizontal and vertical screen scales
    pub fn domains(&self, bounds: &Bounds) -> ([f64; 2], [f64; 2]) {
        (bounds.extent(self.domains[0]), bounds.extent(self.domains[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 10.0,
            max_y: 11.0,
            min_z: 20.0,
            max_z: 21.0,
            max_c: 1.0,
        }
    }

    #[test]
    fn test_observed_domains() {
        let b = bounds();
        let x = AxisProjector::new(Axis::X, ProjectionMode::Observed);
        let y = AxisProjector::new(Axis::Y, ProjectionMode::Observed);
        let z = AxisProjector::new(Axis::Z, ProjectionMode::Observed);

        assert_eq!(x.domains(&b), ([20.0, 21.0], [10.0, 11.0]));
        assert_eq!(y.domains(&b), ([0.0, 1.0], [20.0, 21.0]));
        assert_eq!(z.domains(&b), ([0.0, 1.0], [10.0, 11.0]));
    }

    #[test]
    fn test_position_and_velocity_share_selection() {
        let p = Particle::new(
            1,
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            0.0,
        );
        let x = AxisProjector::new(Axis::X, ProjectionMode::Observed);
        let y = AxisProjector::new(Axis::Y, ProjectionMode::Observed);

        assert_eq!(x.position(&p), (2.0, 3.0));
        assert_eq!(x.velocity(&p), (5.0, 6.0));
        assert_eq!(y.position(&p), (1.0, 2.0));
        assert_eq!(y.velocity(&p), (4.0, 5.0));
    }

    #[test]
    fn test_orthogonal_excludes_brushed_axis() {
        for axis in Axis::all() {
            let projector = AxisProjector::new(axis, ProjectionMode::Orthogonal);
            assert!(!projector.components().contains(&axis));
        }
    }
}
