//! # Renderer Traits
//!
//! This module defines the trait a drawing surface implements to receive
//! slice view glyphs.

use super::glyph::Glyph;
use crate::particle::ParticleId;

/// Drawing surface for slice view glyphs.
///
/// The slice view never draws anything itself. After each recompute it works
/// out which particle ids appeared, stayed or disappeared and calls the
/// matching method here. Implementors own the drawn shapes.
///
/// ## Lifecycle
///
/// For every cycle:
/// 1. **Create** - a shape for each id not drawn in the previous cycle
/// 2. **Update** - path, fill and transform for each id drawn in both cycles
/// 3. **Remove** - each id drawn previously but absent now
///
/// All glyphs share the stroke from [`GLYPH_STROKE`](super::glyph::GLYPH_STROKE)
/// and [`GLYPH_STROKE_WIDTH`](super::glyph::GLYPH_STROKE_WIDTH).
///
/// ## Examples
///
/// ```
/// use sliceview::particle::ParticleId;
/// use sliceview::visualization::{Glyph, SliceRenderer};
///
/// #[derive(Default)]
/// struct CountingRenderer {
///     live: usize,
/// }
///
/// impl SliceRenderer for CountingRenderer {
///     fn create(&mut self, _glyph: &Glyph) {
///         self.live += 1;
///     }
///
///     fn update(&mut self, _glyph: &Glyph) {}
///
///     fn remove(&mut self, _id: ParticleId) {
///         self.live -= 1;
///     }
///
///     fn name(&self) -> &str {
///         "Counting Renderer"
///     }
/// }
/// ```
pub trait SliceRenderer {
    /// Draw a new shape for a particle that was not drawn last cycle.
    ///
    /// # Arguments
    ///
    /// * `glyph` - Geometry, fill and screen position of the new shape
    fn create(&mut self, glyph: &Glyph);

    /// Refresh the shape already drawn for `glyph.id`.
    ///
    /// # Arguments
    ///
    /// * `glyph` - New geometry, fill and screen position
    fn update(&mut self, glyph: &Glyph);

    /// Remove the shape drawn for a particle that no longer survives.
    fn remove(&mut self, id: ParticleId);

    /// Get the name of the renderer for logging
    fn name(&self) -> &str;

    /// Called once after all create/update/remove calls of a cycle.
    fn finish_cycle(&mut self) {
        // Default: nothing to flush
    }
}
