//! Ordered line index for one page.

use crate::geometry::{Point, Rect};
use crate::layout::TextLine;

/// The reconstructed lines of one page, ordered by top edge.
///
/// Built wholesale by the assembler and owned by the engine's page cache;
/// rebuilt from scratch whenever a different page is requested.
#[derive(Debug, Clone)]
pub struct LineIndex {
    page: usize,
    lines: Vec<TextLine>,
}

impl LineIndex {
    pub(crate) fn new(page: usize, lines: Vec<TextLine>) -> Self {
        Self { page, lines }
    }

    /// The page these lines were assembled from (0-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// All lines of the page in stored order.
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// First line whose bottom edge lies at or below `y`.
    ///
    /// For a point inside a line this is that line; for a point in the gap
    /// between lines it is the next line below.
    pub fn first_at_or_after(&self, y: f32) -> Option<&TextLine> {
        self.lines.iter().find(|line| line.bottom() >= y)
    }

    /// Last line whose top edge lies at or above `y`.
    ///
    /// For a point inside a line this is that line; for a point in the gap
    /// between lines it is the previous line above.
    pub fn last_at_or_before(&self, y: f32) -> Option<&TextLine> {
        self.lines.iter().rev().find(|line| line.top() <= y)
    }

    /// Positional variant of [`first_at_or_after`](Self::first_at_or_after).
    pub fn first_index_at_or_after(&self, y: f32) -> Option<usize> {
        self.lines.iter().position(|line| line.bottom() >= y)
    }

    /// Positional variant of [`last_at_or_before`](Self::last_at_or_before).
    pub fn last_index_at_or_before(&self, y: f32) -> Option<usize> {
        self.lines.iter().rposition(|line| line.top() <= y)
    }

    /// Full text of the page, lines joined with `\n`.
    pub fn page_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Visual bounds of every glyph whose origin falls inside `region`.
    pub fn glyph_rects_in(&self, region: &Rect) -> Vec<Rect> {
        let mut rects = Vec::new();
        for line in &self.lines {
            for glyph in line.glyphs() {
                if region.contains_point(&Point::new(glyph.x, glyph.y)) {
                    rects.push(glyph.marker_rect());
                }
            }
        }
        rects
    }
}
