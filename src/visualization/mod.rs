//! # Visualization Module
//!
//! Brushed 2D slice view of a 3D particle field. Particles inside a slab
//! around the brushed coordinate are projected onto the perpendicular plane
//! and drawn as arrow-plus-circle glyphs: the arrow shows in-plane velocity,
//! the circle radius and fill show concentration.
//!
//! ## Architecture
//!
//! [`SliceView`] owns the inputs and runs the pipeline on demand. The stages
//! are plain functions in their own modules so they can be used and tested
//! on their own:
//!
//! - [`brush`] - slab membership and signed plane distance
//! - [`filter`] - concentration threshold and density limit
//! - [`projection`] - shared glyph radius and pixel-space scales
//! - [`glyph`] - arrow/circle paths and tooltips
//!
//! Drawing is left to a [`SliceRenderer`]; [`ShapeReconciler`] diffs particle
//! ids between cycles so the renderer only creates, updates or removes.
//!
//! ## Usage
//!
//! ```
//! use cgmath::Vector3;
//! use sliceview::prelude::*;
//!
//! let particles = vec![
//!     Particle::new(1, Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), 2.0),
//!     Particle::new(2, Vector3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 1.0, 0.0), 4.0),
//! ];
//!
//! let mut view = SliceView::new(RenderConfig::default());
//! view.set_bounds(Bounds::from_particles(&particles).unwrap());
//! view.set_particles(particles);
//! view.set_brush(BrushConfig::new(Axis::Z, 0.0, 0.5));
//! view.set_canvas(Canvas::new(400.0, 300.0));
//!
//! let mut shapes = ShapeSet::new();
//! view.render_into(&mut shapes);
//! assert_eq!(shapes.len(), 1);
//! ```

pub mod axis;
pub mod brush;
pub mod color;
pub mod filter;
pub mod glyph;
pub mod projection;
pub mod reconcile;
pub mod scale;
pub mod shapes;
pub mod slice_view;
pub mod traits;

// Re-export main types
pub use axis::{Axis, AxisProjector, ProjectionMode};
pub use brush::{BrushConfig, CoordGetter};
pub use color::Rgb;
pub use glyph::{Glyph, GlyphBuilder, GLYPH_STROKE, GLYPH_STROKE_WIDTH};
pub use projection::{Canvas, ProjectionScaler};
pub use reconcile::{ReconcilePlan, ReconcileSummary, ShapeReconciler};
pub use shapes::ShapeSet;
pub use slice_view::{compute_frame, CycleScales, GlyphFrame, SliceView};
pub use traits::SliceRenderer;
