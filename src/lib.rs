// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::match_like_matches_macro)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # pdf_select
//!
//! Text selection and search for PDF viewers, built on per-glyph geometry.
//!
//! Viewers render pages as images, so "selecting text" really means mapping a
//! rectangular drag gesture back onto the glyphs the renderer placed. This
//! crate does that mapping: it reconstructs logical lines from raw glyph
//! records, resolves drag gestures into selected text plus highlight
//! rectangles, and computes tight marker rectangles for search hits.
//!
//! ## Core Features
//!
//! - **Line reconstruction**: groups per-glyph records into baseline-ordered
//!   text lines with vertical extents derived from font metrics
//! - **Selection gestures**: character, word, and line granularity (single,
//!   double, and triple click), with geometric word snapping
//! - **Text search**: literal, case-insensitive by default, one hit per
//!   line, with ligature-corrected marker rectangles
//! - **Single-slot page cache**: at most one page's line index is held at a
//!   time, rebuilt on page change and shared by selection and search
//!
//! ## Architecture
//!
//! Glyph geometry enters through the [`GlyphSource`] trait, so the engine is
//! independent of any particular PDF reader. [`StaticGlyphSource`] adapts
//! pre-extracted records (and serializes via serde for fixtures and tools).
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_select::{Point, SearchOptions, SelectionMode, StaticGlyphSource, TextEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Glyph records usually come from a PDF renderer; here, from JSON.
//! let json = std::fs::read_to_string("page_glyphs.json")?;
//! let source: StaticGlyphSource = serde_json::from_str(&json)?;
//! let engine = TextEngine::new(source);
//!
//! // Resolve a double-click drag on page 0
//! let mode = SelectionMode::for_click_count(2);
//! if let Some(selection) = engine.select(0, Point::new(72.0, 140.0), Point::new(301.0, 168.0), mode)? {
//!     println!("selected: {}", selection.text);
//! }
//!
//! // Find every line mentioning "invoice"
//! for hit in engine.search("invoice", &SearchOptions::new())? {
//!     println!("page {} at {:?}: {}", hit.page, hit.marker, hit.snippet);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Page geometry
pub mod geometry;

// Glyph records and sources
pub mod glyph;

// Line reconstruction
pub mod layout;

// Selection gestures
pub mod selection;

// Text search and hit markers
pub mod search;

// Engine facade and page cache
pub mod engine;

// Re-exports
pub use config::EngineConfig;
pub use engine::TextEngine;
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use glyph::{Capabilities, FontMetrics, GlyphRecord, GlyphSource, StaticGlyphSource};
pub use layout::{LineAssembler, LineIndex, LineSelection, TextLine};
pub use search::{LineSearcher, SearchOptions, SearchResult};
pub use selection::{Selection, SelectionMode, SelectionResolver};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # use std::cmp::Ordering;
    /// # use pdf_select::utils::safe_float_cmp;
    /// assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
    /// assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
    /// assert_eq!(safe_float_cmp(1.0, 1.0), Ordering::Equal);
    ///
    /// // NaN handling
    /// assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
    /// assert_eq!(safe_float_cmp(f32::NAN, 1.0), Ordering::Greater);
    /// assert_eq!(safe_float_cmp(1.0, f32::NAN), Ordering::Less);
    /// ```
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
