//! Marker rectangles for search hits.
//!
//! A line's decoded text is usually longer than its glyph run: a ligature
//! glyph such as "ffi" renders three code points from one positioned glyph.
//! A match offset into the text therefore cannot index the glyph run
//! directly; it first has to be corrected by the extra code points of every
//! multi-character glyph lying before the match.

use crate::geometry::Rect;
use crate::glyph::GlyphRecord;

/// Translate a code-point offset in the line text into a glyph index.
///
/// Walks the glyph run accumulating decoded text length. A glyph counts as
/// lying before the offset only when its entire decoded text fits at or
/// before it; each such glyph longer than one code point shrinks the offset
/// by its extra length. An offset landing inside a multi-character glyph is
/// not corrected for that glyph, so the returned index approximates such
/// matches and can reach one past the run.
pub fn glyph_index_for_char_offset(glyphs: &[GlyphRecord], offset: usize) -> usize {
    let mut chars_seen = 0;
    let mut extra = 0;

    for glyph in glyphs {
        let len = glyph.char_count();
        if chars_seen + len > offset {
            break;
        }
        chars_seen += len;
        extra += len.saturating_sub(1);
    }

    // extra never exceeds chars_seen, which never exceeds offset
    offset - extra
}

/// Tight bounds around a match of `match_char_len` code points starting at
/// `char_offset` in the line text.
///
/// The corrected glyph span covers one glyph per matched code point, clamped
/// to the glyph run; `None` means the span clamped away entirely (a match
/// inside a trailing ligature). The box spans every glyph from baseline minus
/// glyph height down to the baseline, inflated by `margin` on all sides.
pub fn marker_for_match(
    glyphs: &[GlyphRecord],
    char_offset: usize,
    match_char_len: usize,
    margin: f32,
) -> Option<Rect> {
    let start = glyph_index_for_char_offset(glyphs, char_offset).min(glyphs.len());
    let end = (start + match_char_len).min(glyphs.len());
    if start >= end {
        return None;
    }

    glyphs[start..end]
        .iter()
        .map(GlyphRecord::marker_rect)
        .reduce(|a, b| a.union(&b))
        .map(|bounds| bounds.inflate(margin))
}
