//! Id-keyed reconciliation between cycles
//!
//! Keeps the set of ids drawn last cycle and diffs it against each new frame:
//! new ids enter, shared ids update, missing ids exit.

use super::glyph::Glyph;
use super::slice_view::GlyphFrame;
use super::traits::SliceRenderer;
use crate::particle::ParticleId;
use std::collections::{HashMap, HashSet};

/// How many shapes a reconcile pass created, updated and removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

/// Id sets for one reconcile pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub enter: Vec<ParticleId>,
    pub update: Vec<ParticleId>,
    pub exit: Vec<ParticleId>,
}

impl ReconcilePlan {
    /// Diff previous ids against the ids of a new frame.
    ///
    /// `enter` and `update` follow frame order; `exit` is sorted so removal
    /// order does not depend on hashing. A repeated id keeps its first glyph.
    pub fn diff(previous: &HashSet<ParticleId>, frame: &GlyphFrame) -> Self {
        let mut plan = ReconcilePlan::default();
        let mut current = HashSet::with_capacity(frame.glyphs.len());

        for glyph in &frame.glyphs {
            if !current.insert(glyph.id) {
                log::warn!("duplicate particle id {} in frame, keeping first", glyph.id);
                continue;
            }
            if previous.contains(&glyph.id) {
                plan.update.push(glyph.id);
            } else {
                plan.enter.push(glyph.id);
            }
        }

        plan.exit = previous.difference(&current).copied().collect();
        plan.exit.sort();
        plan
    }

    /// Ids drawn once this plan is applied
    pub fn drawn(&self) -> HashSet<ParticleId> {
        self.enter.iter().chain(&self.update).copied().collect()
    }
}

/// Tracks drawn ids and drives a [`SliceRenderer`]
#[derive(Debug, Default)]
pub struct ShapeReconciler {
    drawn: HashSet<ParticleId>,
}

impl ShapeReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids drawn by the last applied frame
    pub fn drawn(&self) -> &HashSet<ParticleId> {
        &self.drawn
    }

    /// Push a frame into a renderer; the frame fully replaces the last one.
    ///
    /// Entering shapes are created first, then surviving shapes updated,
    /// then exiting shapes removed.
    pub fn apply(&mut self, frame: &GlyphFrame, renderer: &mut dyn SliceRenderer) -> ReconcileSummary {
        let plan = ReconcilePlan::diff(&self.drawn, frame);
        // Reversed so the first glyph of a repeated id wins
        let glyphs: HashMap<ParticleId, &Glyph> = frame.glyphs.iter().rev().map(|g| (g.id, g)).collect();

        for glyph in plan.enter.iter().filter_map(|id| glyphs.get(id)) {
            renderer.create(glyph);
        }
        for glyph in plan.update.iter().filter_map(|id| glyphs.get(id)) {
            renderer.update(glyph);
        }
        for &id in &plan.exit {
            renderer.remove(id);
        }

        let summary = ReconcileSummary {
            created: plan.enter.len(),
            updated: plan.update.len(),
            removed: plan.exit.len(),
        };

        renderer.finish_cycle();
        log::trace!(
            "{}: created {}, updated {}, removed {}",
            renderer.name(),
            summary.created,
            summary.updated,
            summary.removed
        );

        self.drawn = plan.drawn();
        summary
    }

    /// Remove everything drawn so far
    pub fn clear(&mut self, renderer: &mut dyn SliceRenderer) -> ReconcileSummary {
        self.apply(&GlyphFrame::default(), renderer)
    }
}
