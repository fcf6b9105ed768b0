//! Linear scales
//!
//! Unclamped linear maps from a domain to a range. A zero-width (or
//! non-finite) domain maps every input to the midpoint of the range so
//! degenerate extents never produce NaN geometry.

use super::color::Rgb;

/// Continuous linear map `domain -> range`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Create a new scale
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Position of `value` within the domain, `0.5` when the domain is degenerate
    pub fn normalize(&self, value: f64) -> f64 {
        let width = self.domain[1] - self.domain[0];
        if width == 0.0 || !width.is_finite() {
            return 0.5;
        }
        (value - self.domain[0]) / width
    }

    /// Map a domain value into the range
    pub fn apply(&self, value: f64) -> f64 {
        let t = self.normalize(value);
        self.range[0] + t * (self.range[1] - self.range[0])
    }
}

/// Linear map from a scalar domain to an RGB interpolation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    position: LinearScale,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(domain: [f64; 2], low: Rgb, high: Rgb) -> Self {
        Self {
            position: LinearScale::new(domain, [0.0, 1.0]),
            low,
            high,
        }
    }

    /// Interpolated color for a domain value
    pub fn apply(&self, value: f64) -> Rgb {
        self.low.lerp(&self.high, self.position.apply(value))
    }
}
