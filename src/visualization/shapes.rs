//! Retained shape set with SVG export
//!
//! An in-memory [`SliceRenderer`] that keeps the currently drawn glyphs and
//! can write them out as an SVG document, one `<path class="glyph">` per
//! particle with its tooltip as a `<title>`.

use super::glyph::{fmt_num, Glyph, GLYPH_STROKE, GLYPH_STROKE_WIDTH};
use super::projection::Canvas;
use super::traits::SliceRenderer;
use crate::particle::ParticleId;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Currently drawn glyphs, ordered by particle id
#[derive(Debug, Clone, Default)]
pub struct ShapeSet {
    shapes: BTreeMap<ParticleId, Glyph>,
}

impl ShapeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Glyph> {
        self.shapes.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticleId> + '_ {
        self.shapes.keys().copied()
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.shapes.values()
    }

    /// Render the drawn glyphs as a standalone SVG document
    pub fn to_svg(&self, canvas: Canvas) -> String {
        let width = fmt_num(canvas.width);
        let height = fmt_num(canvas.height);
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for glyph in self.shapes.values() {
            let _ = writeln!(
                svg,
                r#"  <path class="glyph" d="{}" fill="{}" stroke="{}" stroke-width="{}" transform="{}"><title>{}</title></path>"#,
                glyph.path,
                glyph.fill,
                GLYPH_STROKE,
                GLYPH_STROKE_WIDTH,
                glyph.transform(),
                escape_xml(&glyph.tooltip)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl SliceRenderer for ShapeSet {
    fn create(&mut self, glyph: &Glyph) {
        self.shapes.insert(glyph.id, glyph.clone());
    }

    fn update(&mut self, glyph: &Glyph) {
        self.shapes.insert(glyph.id, glyph.clone());
    }

    fn remove(&mut self, id: ParticleId) {
        self.shapes.remove(&id);
    }

    fn name(&self) -> &str {
        "Shape Set"
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::color::Rgb;

    fn glyph(id: u64) -> Glyph {
        Glyph {
            id: ParticleId(id),
            path: "M 1,2 L 0,0 L 0,0 Z".to_string(),
            tooltip: "Concentration: 1\nVelocity: (1, 2)".to_string(),
            fill: Rgb::new(70, 130, 180),
            screen_x: 12.5,
            screen_y: 40.0,
        }
    }

    #[test]
    fn test_create_update_remove() {
        let mut shapes = ShapeSet::new();
        shapes.create(&glyph(1));
        shapes.create(&glyph(2));

        let mut moved = glyph(1);
        moved.screen_x = 99.0;
        shapes.update(&moved);
        shapes.remove(ParticleId(2));

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes.get(ParticleId(1)).unwrap().screen_x, 99.0);
    }

    #[test]
    fn test_svg_output() {
        let mut shapes = ShapeSet::new();
        shapes.create(&glyph(3));
        let svg = shapes.to_svg(Canvas::new(200.0, 100.0));

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100""#));
        assert!(svg.contains(r#"fill="rgb(70, 130, 180)""#));
        assert!(svg.contains(r#"stroke="rgb(0, 0, 0)" stroke-width="0.3""#));
        assert!(svg.contains(r#"transform="translate(12.5,40)""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a<b & "c">"#), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
