//! Brushed slice view component
//!
//! Holds the host-supplied inputs and turns them into a [`GlyphFrame`] on
//! demand. Every recompute runs the whole pipeline:
//!
//! 1. brush selection
//! 2. concentration threshold
//! 3. density limit
//! 4. cycle-wide aggregation ([`CycleScales`])
//! 5. per-particle projection and glyph construction
//!
//! Nothing but the renderer's drawn shapes survives between cycles.

use super::axis::AxisProjector;
use super::brush::{select_brushed, BrushConfig, Brushed};
use super::filter::{filter_concentration, limit_density};
use super::glyph::{velocity_scale, Glyph, GlyphBuilder};
use super::projection::{shared_radius, Canvas, ProjectionScaler};
use super::reconcile::{ReconcileSummary, ShapeReconciler};
use super::scale::ColorScale;
use super::traits::SliceRenderer;
use crate::config::RenderConfig;
use crate::error::SliceResult;
use crate::particle::{Bounds, Particle};
use crate::stats::CycleStats;
use cgmath::InnerSpace;
use std::time::Instant;

/// Glyphs produced by one recompute, keyed by particle id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphFrame {
    pub glyphs: Vec<Glyph>,
    /// Shared glyph radius used for the screen inset
    pub radius: f64,
}

impl GlyphFrame {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Aggregates computed once per cycle from the surviving particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleScales {
    /// Shared glyph radius in pixels
    pub radius: f64,
    /// Largest 3D velocity magnitude
    pub v_max: f64,
    /// Largest concentration
    pub max_conc: f64,
}

impl CycleScales {
    /// Aggregate over the survivors of a cycle
    pub fn aggregate(survivors: &[Brushed<'_>], canvas: Canvas) -> Self {
        let (v_max, max_conc) = survivors.iter().fold((0.0_f64, 0.0_f64), |(v, c), b| {
            (
                v.max(b.particle.velocity.magnitude()),
                c.max(b.particle.concentration),
            )
        });
        Self {
            radius: shared_radius(canvas, survivors.len()),
            v_max,
            max_conc,
        }
    }

    /// Divisor from velocity to glyph-local pixels
    pub fn velocity_scale(&self) -> f64 {
        velocity_scale(self.v_max, self.radius)
    }
}

/// Run the full pipeline over one snapshot of inputs.
///
/// Pure: the same inputs always give the same frame.
pub fn compute_frame(
    particles: &[Particle],
    bounds: &Bounds,
    brush: &BrushConfig,
    canvas: Canvas,
    config: &RenderConfig,
) -> (GlyphFrame, CycleStats) {
    let start = Instant::now();
    let mut stats = CycleStats {
        input: particles.len(),
        ..CycleStats::default()
    };

    let brushed = select_brushed(particles, brush);
    stats.brushed = brushed.len();

    let thresholded =
        filter_concentration(brushed, config.concentration_threshold_ratio, bounds.max_c);
    stats.thresholded = thresholded.len();

    let survivors = limit_density(thresholded, config.max_dots);
    stats.rendered = survivors.len();

    if survivors.is_empty() {
        stats.elapsed = start.elapsed();
        return (GlyphFrame::default(), stats);
    }

    let scales = CycleScales::aggregate(&survivors, canvas);
    let projector = AxisProjector::new(brush.axis, config.projection);
    let scaler = ProjectionScaler::new(projector, canvas, config.margin, bounds, scales.radius);
    let builder = GlyphBuilder::new(projector, scales.velocity_scale(), scales.max_conc);
    let [low, high] = config.color_range;
    let colors = ColorScale::new([0.0, scales.max_conc], low, high);

    let glyphs = survivors
        .iter()
        .map(|b| {
            let shape = builder.build(b.particle);
            let (screen_x, screen_y) = scaler.project(b.particle);
            Glyph {
                id: b.particle.id,
                path: shape.path,
                tooltip: shape.tooltip,
                fill: colors.apply(b.particle.concentration),
                screen_x,
                screen_y,
            }
        })
        .collect();

    stats.elapsed = start.elapsed();
    (
        GlyphFrame {
            glyphs,
            radius: scales.radius,
        },
        stats,
    )
}

/// Slice view of a 3D particle field
pub struct SliceView {
    config: RenderConfig,
    particles: Option<Vec<Particle>>,
    bounds: Option<Bounds>,
    brush: Option<BrushConfig>,
    canvas: Option<Canvas>,
    reconciler: ShapeReconciler,
    last_stats: Option<CycleStats>,
    needs_update: bool,
}

impl SliceView {
    /// Create a view with no inputs yet
    pub fn new(config: RenderConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("slice view created with invalid config: {}", err);
        }
        Self {
            config,
            particles: None,
            bounds: None,
            brush: None,
            canvas: None,
            reconciler: ShapeReconciler::new(),
            last_stats: None,
            needs_update: true,
        }
    }

    /// Replace the particle dataset
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = Some(particles);
        self.needs_update = true;
    }

    /// Replace the dataset extents
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.needs_update = true;
    }

    /// Replace the brushed slab
    pub fn set_brush(&mut self, brush: BrushConfig) {
        self.brush = Some(brush);
        self.needs_update = true;
    }

    /// Move the brush plane, keeping axis, thickness and getter
    pub fn set_brushed_coord(&mut self, coord: f64) {
        if let Some(brush) = &mut self.brush {
            brush.brushed_coord = coord;
            self.needs_update = true;
        }
    }

    /// Drawing surface size changed
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = Some(canvas);
        self.needs_update = true;
    }

    /// Replace the render config.
    ///
    /// An invalid config is rejected and the current one kept.
    pub fn set_config(&mut self, config: RenderConfig) -> SliceResult<()> {
        if let Err(err) = config.validate() {
            log::warn!("rejected invalid slice view config: {}", err);
            return Err(err);
        }
        self.config = config;
        self.needs_update = true;
        Ok(())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn particles(&self) -> Option<&[Particle]> {
        self.particles.as_deref()
    }

    /// Whether an input changed since the last frame reached a renderer
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Stage counts of the last recompute
    pub fn last_stats(&self) -> Option<&CycleStats> {
        self.last_stats.as_ref()
    }

    /// Recompute the frame regardless of the dirty flag.
    ///
    /// Returns `None` without doing any work while particles, bounds, brush
    /// or canvas are still missing.
    pub fn recompute(&mut self) -> Option<GlyphFrame> {
        let (Some(particles), Some(bounds), Some(brush), Some(canvas)) =
            (&self.particles, &self.bounds, &self.brush, self.canvas)
        else {
            log::trace!("slice view inputs incomplete, skipping cycle");
            return None;
        };

        let (frame, stats) = compute_frame(particles, bounds, brush, canvas, &self.config);
        log::debug!(
            "slice cycle on {} = {}: {} -> brushed {} -> thresholded {} -> rendered {} in {:?}",
            brush.axis.as_str(),
            brush.brushed_coord,
            stats.input,
            stats.brushed,
            stats.thresholded,
            stats.rendered,
            stats.elapsed
        );

        self.last_stats = Some(stats);
        Some(frame)
    }

    /// Recompute and push the result into a renderer.
    ///
    /// Returns `None` when nothing changed since the last render or inputs
    /// are missing. An empty frame clears every previously drawn shape.
    pub fn render_into(&mut self, renderer: &mut dyn SliceRenderer) -> Option<ReconcileSummary> {
        if !self.needs_update {
            log::trace!("slice view unchanged, skipping render");
            return None;
        }
        let frame = self.recompute()?;
        let summary = self.reconciler.apply(&frame, renderer);
        self.needs_update = false;
        Some(summary)
    }
}

impl Default for SliceView {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SliceError;
    use crate::visualization::axis::Axis;
    use crate::visualization::shapes::ShapeSet;
    use cgmath::Vector3;

    fn sample() -> Vec<Particle> {
        (0..20)
            .map(|i| {
                let t = i as f64;
                Particle::new(
                    i as u64,
                    Vector3::new(t * 0.1, (t * 0.7).sin(), (t * 0.3).cos()),
                    Vector3::new(t.cos(), t.sin(), 0.5),
                    t * 0.5,
                )
            })
            .collect()
    }

    fn ready_view() -> SliceView {
        let data = sample();
        let mut view = SliceView::default();
        view.set_bounds(Bounds::from_particles(&data).unwrap());
        view.set_particles(data);
        view.set_brush(BrushConfig::new(Axis::X, 1.0, 0.55));
        view.set_canvas(Canvas::new(300.0, 200.0));
        view
    }

    #[test]
    fn test_missing_inputs_is_noop() {
        let mut view = SliceView::default();
        view.set_particles(sample());
        assert!(view.recompute().is_none());
        assert!(view.needs_update());
        assert!(view.last_stats().is_none());
    }

    #[test]
    fn test_render_clears_dirty_flag() {
        let mut view = ready_view();
        let frame = view.recompute().unwrap();
        assert!(view.needs_update());
        assert_eq!(frame.len(), view.last_stats().unwrap().rendered);

        let mut shapes = ShapeSet::new();
        let summary = view.render_into(&mut shapes).unwrap();
        assert!(!view.needs_update());
        assert_eq!(summary.created, frame.len());

        view.set_brushed_coord(0.2);
        assert!(view.needs_update());
    }

    #[test]
    fn test_clean_view_skips_render() {
        let mut view = ready_view();
        let mut shapes = ShapeSet::new();
        view.render_into(&mut shapes).unwrap();
        let stats = view.last_stats().copied();

        assert!(view.render_into(&mut shapes).is_none());
        assert_eq!(view.last_stats().copied(), stats);

        view.set_canvas(Canvas::new(300.0, 200.0));
        let summary = view.render_into(&mut shapes).unwrap();
        assert_eq!(summary.created, 0);
        assert_eq!(summary.updated, shapes.len());
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let mut view = ready_view();
        let mut shapes = ShapeSet::new();
        view.render_into(&mut shapes).unwrap();

        let result = view.set_config(RenderConfig::default().with_threshold_ratio(1.5));
        assert!(matches!(result, Err(SliceError::ThresholdOutOfRange(_))));
        assert_eq!(view.config(), &RenderConfig::default());
        assert!(!view.needs_update());

        view.set_config(RenderConfig::default().with_max_dots(3)).unwrap();
        assert_eq!(view.config().max_dots, 3);
        assert!(view.needs_update());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut view = ready_view();
        let first = view.recompute().unwrap();
        let second = view.recompute().unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_cycle_scales_use_full_velocity_magnitude() {
        let data = vec![Particle::new(
            1,
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 4.0),
            2.0,
        )];
        let survivors = select_brushed(&data, &BrushConfig::new(Axis::Z, 0.0, 1.0));
        let scales = CycleScales::aggregate(&survivors, Canvas::new(100.0, 100.0));

        assert_eq!(scales.v_max, 5.0);
        assert_eq!(scales.max_conc, 2.0);
        assert_eq!(scales.radius, 300.0);
        assert_eq!(scales.velocity_scale(), 0.25 * 5.0 / 300.0);
    }

    #[test]
    fn test_fill_monotone_in_concentration() {
        let mut view = ready_view();
        let frame = view.recompute().unwrap();
        let data = sample();
        let mut pairs: Vec<(f64, u8)> = frame
            .glyphs
            .iter()
            .map(|g| (data[g.id.0 as usize].concentration, g.fill.g))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        // White -> steelblue: green channel falls as concentration rises
        assert!(pairs.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
