//! Selection value types and gesture resolution.

pub mod resolver;

pub use resolver::SelectionResolver;

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Granularity at which a selection gesture snaps to text boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Boundaries fall on individual glyph midpoints
    Character,
    /// Boundaries snap outward to word edges
    Word,
    /// Any range covers the whole line
    Line,
}

impl SelectionMode {
    /// Map a mouse click count to its conventional granularity: double-click
    /// selects words, triple-click selects lines, anything else characters.
    pub fn for_click_count(clicks: u32) -> Self {
        match clicks {
            2 => SelectionMode::Word,
            3 => SelectionMode::Line,
            _ => SelectionMode::Character,
        }
    }
}

/// A resolved text selection on one page.
///
/// Markers are highlight rectangles in page coordinates, one per line the
/// selection touches with visible content. Produced fresh per gesture; never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Page the selection lives on (0-based)
    pub page: usize,
    /// Highlight rectangles in page coordinates
    pub markers: Vec<Rect>,
    /// The selected text, lines joined with `\n`
    pub text: String,
}

impl Selection {
    /// Markers mapped into device space for a given zoom factor.
    pub fn scaled_markers(&self, scale: f32) -> Vec<Rect> {
        self.markers.iter().map(|m| m.scaled(scale)).collect()
    }
}
