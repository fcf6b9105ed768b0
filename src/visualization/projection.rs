//! Pixel-space projection of in-plane positions

use super::axis::AxisProjector;
use super::scale::LinearScale;
use crate::particle::{Bounds, Particle};

/// Smallest shared glyph radius in pixels
pub const MIN_GLYPH_RADIUS: f64 = 5.0;

/// Canvas size in pixels, as reported by the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Radius shared by every glyph in a cycle.
///
/// Fewer survivors get bigger glyphs, never smaller than [`MIN_GLYPH_RADIUS`].
pub fn shared_radius(canvas: Canvas, count: usize) -> f64 {
    if count == 0 {
        return MIN_GLYPH_RADIUS;
    }
    let radius = 3.0 * canvas.width.min(canvas.height) / count as f64;
    if radius.is_finite() {
        radius.max(MIN_GLYPH_RADIUS)
    } else {
        MIN_GLYPH_RADIUS
    }
}

/// Maps the two in-plane coordinates onto the canvas.
///
/// Both scales are inset by `margin + radius` so glyphs at the extents stay
/// fully visible. The vertical scale is inverted so larger values sit higher.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionScaler {
    projector: AxisProjector,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl ProjectionScaler {
    pub fn new(
        projector: AxisProjector,
        canvas: Canvas,
        margin: f64,
        bounds: &Bounds,
        radius: f64,
    ) -> Self {
        let inset = margin + radius;
        let (x_domain, y_domain) = projector.domains(bounds);
        Self {
            projector,
            x_scale: LinearScale::new(x_domain, [inset, canvas.width - inset]),
            y_scale: LinearScale::new(y_domain, [canvas.height - inset, inset]),
        }
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    /// Screen position of a particle
    pub fn project(&self, particle: &Particle) -> (f64, f64) {
        let (x, y) = self.projector.position(particle);
        (self.x_scale.apply(x), self.y_scale.apply(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::axis::{Axis, ProjectionMode};
    use cgmath::Vector3;

    fn unit_bounds() -> Bounds {
        Bounds {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
            min_z: 0.0,
            max_z: 1.0,
            max_c: 1.0,
        }
    }

    #[test]
    fn test_shared_radius() {
        let canvas = Canvas::new(400.0, 300.0);
        assert_eq!(shared_radius(canvas, 10), 90.0);
        assert_eq!(shared_radius(canvas, 1000), MIN_GLYPH_RADIUS);
        assert_eq!(shared_radius(Canvas::new(0.0, 0.0), 3), MIN_GLYPH_RADIUS);
    }

    #[test]
    fn test_extents_map_to_inset_corners() {
        let projector = AxisProjector::new(Axis::Z, ProjectionMode::Observed);
        let scaler = ProjectionScaler::new(projector, Canvas::new(200.0, 100.0), 10.0, &unit_bounds(), 5.0);

        let origin = Particle::new(1, Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 0.0);
        let far = Particle::new(2, Vector3::new(1.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 0.0);

        assert_eq!(scaler.project(&origin), (15.0, 85.0));
        assert_eq!(scaler.project(&far), (185.0, 15.0));
    }

    #[test]
    fn test_zero_width_bounds_center_the_glyph() {
        let bounds = Bounds {
            min_y: 2.0,
            max_y: 2.0,
            ..unit_bounds()
        };
        let projector = AxisProjector::new(Axis::Z, ProjectionMode::Observed);
        let scaler = ProjectionScaler::new(projector, Canvas::new(100.0, 100.0), 0.0, &bounds, 0.0);
        let p = Particle::new(1, Vector3::new(0.0, 2.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 0.0);

        let (_, y) = scaler.project(&p);
        assert_eq!(y, 50.0);
    }
}
