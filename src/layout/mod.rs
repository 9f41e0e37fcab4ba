//! Line reconstruction for selection and search.
//!
//! This module turns the flat glyph stream of one page into ordered logical
//! lines:
//! - Vertical-proximity clustering of consecutive glyphs into lines
//! - Line extents derived from font ascent/descent metrics
//! - Boundary searches mapping a y-coordinate to its nearest line

pub mod assembler;
pub mod index;
pub mod line;

// Re-export main types
pub use assembler::LineAssembler;
pub use index::LineIndex;
pub use line::{LineSelection, TextLine};
