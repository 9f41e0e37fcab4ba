//! Mapping a two-point gesture to a text selection.

use crate::geometry::Point;
use crate::layout::LineIndex;
use crate::selection::{Selection, SelectionMode};

/// Resolves rectangular drag gestures against a page's line index.
pub struct SelectionResolver;

impl SelectionResolver {
    /// Resolve the selection between two page-space points.
    ///
    /// The points are normalized so the one higher on the page leads, ties
    /// broken by x, making the result independent of drag direction. The
    /// boundary lines come from the index's y-searches; a gesture starting
    /// below all lines or ending above all lines resolves to `None`, which is
    /// a routine outcome rather than an error.
    ///
    /// Across multiple lines, the lead line is resolved from `start.x`
    /// rightward, the final line up to `end.x`, and every line strictly
    /// between over its full width. A `\n` precedes each middle line and the
    /// final line in the accumulated text whether or not that line
    /// contributes visible glyphs, so the line structure of the copied text
    /// survives blank lines.
    pub fn resolve(
        index: &LineIndex,
        start: Point,
        end: Point,
        mode: SelectionMode,
    ) -> Option<Selection> {
        let (start, end) = if start.y > end.y || (start.y == end.y && start.x > end.x) {
            (end, start)
        } else {
            (start, end)
        };

        let start_idx = index.first_index_at_or_after(start.y)?;
        let end_idx = index.last_index_at_or_before(end.y)?;

        let lines = index.lines();
        let mut markers = Vec::new();
        let mut text = String::new();

        if start_idx == end_idx {
            if let Some(hit) = lines[start_idx].select_range(start.x, end.x, mode) {
                markers.push(hit.rect);
                text.push_str(&hit.text);
            }
        } else {
            if let Some(hit) = lines[start_idx].select_range(start.x, f32::INFINITY, mode) {
                markers.push(hit.rect);
                text.push_str(&hit.text);
            }
            // Empty when the boundary lines are adjacent, or when the two
            // y-searches land on lines bracketing a gap in reverse order
            for idx in start_idx + 1..end_idx {
                text.push('\n');
                if let Some(hit) = lines[idx].select_range(f32::NEG_INFINITY, f32::INFINITY, mode)
                {
                    markers.push(hit.rect);
                    text.push_str(&hit.text);
                }
            }
            text.push('\n');
            if let Some(hit) = lines[end_idx].select_range(f32::NEG_INFINITY, end.x, mode) {
                markers.push(hit.rect);
                text.push_str(&hit.text);
            }
        }

        if text.is_empty() {
            log::trace!(
                "gesture on page {} between lines {} and {} selected nothing",
                index.page(),
                start_idx,
                end_idx
            );
            None
        } else {
            Some(Selection {
                page: index.page(),
                markers,
                text,
            })
        }
    }
}
