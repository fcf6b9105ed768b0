//! Velocity/concentration glyphs
//!
//! Each glyph is an SVG path in glyph-local coordinates (origin at the
//! particle's screen position):
//!
//! - a filled triangle pointing from the origin toward the scaled in-plane
//!   velocity `(xv, yv)`, with a perpendicular tail one third of its length
//! - a circle centered on the arrow tip whose radius grows with concentration
//!
//! The circle is always drawn top -> bottom -> top, whatever the axis.

use super::axis::AxisProjector;
use super::color::Rgb;
use super::scale::LinearScale;
use crate::particle::{Particle, ParticleId};
use std::fmt::Write;

/// Stroke color shared by all glyphs
pub const GLYPH_STROKE: Rgb = Rgb::BLACK;
/// Stroke width in glyph-local units
pub const GLYPH_STROKE_WIDTH: f64 = 0.3;
/// Circle radius range for concentrations `[0, max]`
pub const CIRCLE_RADIUS_RANGE: [f64; 2] = [0.5, 5.0];

/// One drawable glyph for one particle in one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub id: ParticleId,
    pub path: String,
    pub tooltip: String,
    pub fill: Rgb,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl Glyph {
    /// SVG transform placing the glyph on screen
    pub fn transform(&self) -> String {
        format!("translate({},{})", fmt_num(self.screen_x), fmt_num(self.screen_y))
    }
}

/// Path and tooltip for a single particle
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphShape {
    pub path: String,
    pub tooltip: String,
    pub circle_radius: f64,
}

/// Divisor turning velocities into glyph-local pixels.
///
/// The fastest particle's arrow is four glyph radii long.
pub fn velocity_scale(v_max: f64, radius: f64) -> f64 {
    0.25 * v_max / radius
}

/// Builds glyph shapes for one cycle
#[derive(Debug, Clone, Copy)]
pub struct GlyphBuilder {
    projector: AxisProjector,
    velocity_scale: f64,
    circle_scale: LinearScale,
}

impl GlyphBuilder {
    pub fn new(projector: AxisProjector, velocity_scale: f64, max_conc: f64) -> Self {
        Self {
            projector,
            velocity_scale,
            circle_scale: LinearScale::new([0.0, max_conc], CIRCLE_RADIUS_RANGE),
        }
    }

    /// Radius of the concentration circle
    pub fn circle_radius(&self, concentration: f64) -> f64 {
        self.circle_scale.apply(concentration)
    }

    pub fn build(&self, particle: &Particle) -> GlyphShape {
        let (vx, vy) = self.projector.velocity(particle);

        // A zero or broken scale collapses the arrow onto the origin
        let usable = self.velocity_scale.is_finite() && self.velocity_scale > 0.0;
        let (xv, yv) = if usable {
            (vx / self.velocity_scale, vy / self.velocity_scale)
        } else {
            (0.0, 0.0)
        };
        let (xv, yv) = if xv.is_finite() && yv.is_finite() {
            (xv, yv)
        } else {
            (0.0, 0.0)
        };

        let circle_radius = self.circle_radius(particle.concentration);

        let mut path = String::new();
        let _ = write!(
            path,
            "M {},{} L {},{} L {},{} Z",
            fmt_num(xv),
            fmt_num(yv),
            fmt_num(-yv / 3.0),
            fmt_num(xv / 3.0),
            fmt_num(yv / 3.0),
            fmt_num(-xv / 3.0),
        );
        let r = fmt_num(circle_radius);
        let top = fmt_num(yv - circle_radius);
        let bottom = fmt_num(yv + circle_radius);
        let x = fmt_num(xv);
        let _ = write!(
            path,
            " M {x},{top} A {r},{r} 0 1 1 {x},{bottom} A {r},{r} 0 1 1 {x},{top}"
        );

        let tooltip = format!(
            "Concentration: {}\nVelocity: ({}, {})",
            fmt_num(particle.concentration),
            fmt_num(vx),
            fmt_num(vy)
        );

        GlyphShape {
            path,
            tooltip,
            circle_radius,
        }
    }
}

/// Shortest round-trip number formatting, with `-0` printed as `0`
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
