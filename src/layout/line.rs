//! A single reconstructed text line.

use crate::geometry::Rect;
use crate::glyph::GlyphRecord;
use crate::selection::SelectionMode;

/// The part of a selection contributed by one line: a highlight rectangle and
/// the covered text.
#[derive(Debug, Clone)]
pub struct LineSelection {
    /// Highlight rectangle spanning the selected glyphs, full line height
    pub rect: Rect,
    /// Concatenated decoded text of the selected glyphs
    pub text: String,
}

/// One logical line of text: a run of glyphs in interpreter order plus the
/// vertical extent derived from their font metrics.
///
/// Lines are built incrementally by the assembler and immutable afterwards.
/// A line always contains at least one glyph.
#[derive(Debug, Clone)]
pub struct TextLine {
    glyphs: Vec<GlyphRecord>,
    top: f32,
    bottom: f32,
}

impl TextLine {
    /// Start a new line with its first glyph.
    pub(crate) fn new(first: GlyphRecord) -> Self {
        let top = first.y - first.font.ascent_extent();
        let bottom = first.y + first.font.descent_extent();
        Self {
            glyphs: vec![first],
            top,
            bottom,
        }
    }

    /// Whether a glyph belongs on this line.
    ///
    /// The glyph's baseline must lie within `tolerance * height` of the
    /// baseline of the line's most recent glyph, where `height` is that
    /// recent glyph's rendered height. The default tolerance of 0.5 makes
    /// the test "within half a glyph height".
    pub(crate) fn accepts(&self, glyph: &GlyphRecord, tolerance: f32) -> bool {
        let Some(last) = self.glyphs.last() else {
            return false;
        };
        (last.y - glyph.y).abs() < last.height * tolerance
    }

    /// Append a glyph and widen the vertical extents.
    ///
    /// The top edge only ever moves up and the bottom edge only ever moves
    /// down, so a line mixing font sizes spans the tallest ascender and the
    /// deepest descender it contains.
    pub(crate) fn push(&mut self, glyph: GlyphRecord) {
        self.top = self.top.min(glyph.y - glyph.font.ascent_extent());
        self.bottom = self.bottom.max(glyph.y + glyph.font.descent_extent());
        self.glyphs.push(glyph);
    }

    /// Top edge of the line in page coordinates.
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Bottom edge of the line in page coordinates.
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// The glyphs of this line in interpreter order.
    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    /// Concatenated decoded text of the whole line.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.text.as_str()).collect()
    }

    /// Resolve an x-range against this line at the given granularity.
    ///
    /// `startx` and `endx` are swapped if reversed. The range resolves to a
    /// pair of boundary glyph indices and must cover at least two glyphs to
    /// contribute; a range landing on a single glyph midpoint resolves empty.
    /// Returns `None` when the range resolves empty.
    pub fn select_range(&self, startx: f32, endx: f32, mode: SelectionMode) -> Option<LineSelection> {
        let (startx, endx) = if startx > endx {
            (endx, startx)
        } else {
            (startx, endx)
        };

        let start = self.start_index(startx, mode)?;
        let end = self.end_index(endx, mode)?;
        if end <= start {
            return None;
        }

        let text: String = self.glyphs[start..=end]
            .iter()
            .map(|g| g.text.as_str())
            .collect();
        let first = &self.glyphs[start];
        let last = &self.glyphs[end];
        let rect = Rect::from_points(first.x, self.top, last.end_x(), self.bottom);

        Some(LineSelection { rect, text })
    }

    /// Find the first selected glyph index for a range starting at `startx`.
    ///
    /// Scans forward until a glyph's midpoint reaches `startx`. Word
    /// granularity snaps back to the start of the word containing the hit,
    /// tracked through blank/non-blank transitions seen during the scan. The
    /// word fallback can resolve even when no midpoint reaches `startx` at
    /// all (a range starting right of the text snaps to the last word).
    fn start_index(&self, startx: f32, mode: SelectionMode) -> Option<usize> {
        if mode == SelectionMode::Line {
            return Some(0);
        }

        let mut hit = None;
        let mut word_start = None;
        let mut last_was_blank = true;

        for (idx, glyph) in self.glyphs.iter().enumerate() {
            if startx <= glyph.mid_x() {
                hit = Some(idx);
            }
            // Word tracking still sees the hit glyph itself
            if last_was_blank {
                word_start = Some(idx);
            }
            last_was_blank = glyph.is_blank();
            if hit.is_some() {
                break;
            }
        }

        match mode {
            SelectionMode::Character => hit,
            SelectionMode::Word => word_start,
            SelectionMode::Line => Some(0),
        }
    }

    /// Find the last selected glyph index for a range ending at `endx`.
    ///
    /// Mirror image of [`start_index`](Self::start_index): scans backward
    /// until a glyph's midpoint drops to `endx`, with word granularity
    /// snapping forward to the end of the word containing the hit.
    fn end_index(&self, endx: f32, mode: SelectionMode) -> Option<usize> {
        if mode == SelectionMode::Line {
            return Some(self.glyphs.len() - 1);
        }

        let mut hit = None;
        let mut word_end = None;
        let mut last_was_blank = true;

        for (idx, glyph) in self.glyphs.iter().enumerate().rev() {
            if glyph.mid_x() <= endx {
                hit = Some(idx);
            }
            if last_was_blank {
                word_end = Some(idx);
            }
            last_was_blank = glyph.is_blank();
            if hit.is_some() {
                break;
            }
        }

        match mode {
            SelectionMode::Character => hit,
            SelectionMode::Word => word_end,
            SelectionMode::Line => Some(self.glyphs.len() - 1),
        }
    }
}
