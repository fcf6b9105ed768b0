//! # Sliceview Prelude
//!
//! Commonly used types for hosting a slice view.
//!
//! ## Usage
//!
//! ```rust
//! use sliceview::prelude::*;
//! ```

// Re-export configuration and errors
pub use crate::config::RenderConfig;
pub use crate::error::{SliceError, SliceResult};

// Re-export data model
pub use crate::particle::{Bounds, Particle, ParticleId};

// Re-export the slice view and its renderer seam
pub use crate::visualization::{
    Axis, BrushConfig, Canvas, Glyph, GlyphFrame, ProjectionMode, Rgb, ShapeSet, SliceRenderer,
    SliceView,
};

// Re-export cycle statistics
pub use crate::stats::{CycleStats, StatsMonitor};
