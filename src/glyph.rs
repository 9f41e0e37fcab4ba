//! Glyph-level input model.
//!
//! The engine consumes positioned glyph records produced by an external PDF
//! content interpreter. A record carries the decoded Unicode text of one
//! rendered glyph (one or more code points for ligatures), its position and
//! advance in top-down page coordinates, and the font metrics needed to
//! derive line extents. This crate never parses PDF content itself; the
//! [`GlyphSource`] trait is the seam to whatever does.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Font metrics attached to a glyph record.
///
/// Ascent and descent are unitless fractions of the font size, as reported by
/// font descriptors (a descriptor value of 750/1000 arrives here as 0.75).
/// Descent is commonly negative in descriptors; only magnitudes matter for
/// extent computation, so both signs are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Ascender height as a fraction of the font size
    pub ascent_ratio: f32,
    /// Descender depth as a fraction of the font size
    pub descent_ratio: f32,
    /// Font size in points
    pub size_pt: f32,
}

impl FontMetrics {
    /// Create new font metrics.
    pub fn new(ascent_ratio: f32, descent_ratio: f32, size_pt: f32) -> Self {
        Self {
            ascent_ratio,
            descent_ratio,
            size_pt,
        }
    }

    /// Ascender extent above the baseline, in page units.
    pub fn ascent_extent(&self) -> f32 {
        (self.ascent_ratio * self.size_pt).abs()
    }

    /// Descender extent below the baseline, in page units.
    pub fn descent_extent(&self) -> f32 {
        (self.descent_ratio * self.size_pt).abs()
    }
}

/// One positioned glyph as delivered by the content interpreter.
///
/// `y` is the baseline y-coordinate measured downward from the top of the
/// page. The interpreter performs any coordinate flip before records reach
/// this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecord {
    /// Decoded Unicode text (one or more code points; ligatures decode to
    /// several)
    pub text: String,
    /// X coordinate of the glyph origin
    pub x: f32,
    /// Baseline y-coordinate (top-down)
    pub y: f32,
    /// Horizontal advance width
    pub width: f32,
    /// Rendered glyph height
    pub height: f32,
    /// Metrics of the font the glyph was set in
    pub font: FontMetrics,
}

impl GlyphRecord {
    /// Create a new glyph record.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32, font: FontMetrics) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            font,
        }
    }

    /// Whether the decoded text is empty or all whitespace.
    ///
    /// Blank glyphs separate words in word-granularity selection.
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Horizontal midpoint of the glyph advance.
    ///
    /// Character and word selection boundaries compare against this midpoint,
    /// so a drag that covers less than half a glyph excludes it.
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Right edge of the glyph advance.
    pub fn end_x(&self) -> f32 {
        self.x + self.width
    }

    /// Visual bounds of the glyph: the baseline origin extended up by the
    /// glyph height and right by the advance width.
    pub fn marker_rect(&self) -> Rect {
        Rect::new(self.x, self.y - self.height, self.width, self.height)
    }

    /// Number of code points in the decoded text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Reject records the engine cannot process.
    ///
    /// Geometry must be finite; the font size must be positive and the extent
    /// ratios finite, with at least one of them nonzero. A record failing
    /// these checks indicates an interpreter fault and is surfaced as a typed
    /// error rather than silently flattening its line to zero height.
    pub fn validate(&self, page: usize) -> Result<()> {
        if !(self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()) {
            return Err(Error::MalformedGlyph {
                page,
                reason: format!(
                    "non-finite geometry for {:?} (x={}, y={}, width={}, height={})",
                    self.text, self.x, self.y, self.width, self.height
                ),
            });
        }
        if !self.font.size_pt.is_finite() || self.font.size_pt <= 0.0 {
            return Err(Error::FontMetrics {
                page,
                glyph: self.text.clone(),
                reason: format!("non-positive font size {}", self.font.size_pt),
            });
        }
        if !(self.font.ascent_ratio.is_finite() && self.font.descent_ratio.is_finite()) {
            return Err(Error::FontMetrics {
                page,
                glyph: self.text.clone(),
                reason: "non-finite ascent/descent".to_string(),
            });
        }
        if self.font.ascent_ratio == 0.0 && self.font.descent_ratio == 0.0 {
            return Err(Error::FontMetrics {
                page,
                glyph: self.text.clone(),
                reason: "ascent and descent both zero".to_string(),
            });
        }
        Ok(())
    }
}

bitflags! {
    /// Operations a glyph source supports.
    ///
    /// The engine rejects an operation whose flag the source does not declare
    /// with [`Error::CapabilityUnavailable`], so callers can enable UI
    /// affordances from the descriptor instead of probing concrete types.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u32 {
        /// Source supplies glyph records usable for text selection
        const SELECTION = 1 << 0;

        /// Source supplies glyph records usable for text search
        const SEARCH = 1 << 1;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Provider of per-page glyph records.
///
/// Implemented by adapters over a live PDF interpreter, or by
/// [`StaticGlyphSource`] for pre-extracted data. Producing records may be
/// expensive (a live adapter typically re-interprets the page content
/// stream); the engine caches one page of derived state and re-requests
/// records only when the page changes.
pub trait GlyphSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Operations this source supports. Defaults to all.
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    /// Produce the glyph records for one page, in interpreter order.
    ///
    /// `page` is 0-based and guaranteed by the engine to be below
    /// [`page_count`](Self::page_count). Interpreter failures surface as
    /// [`Error::Source`].
    fn glyph_records(&self, page: usize) -> Result<Vec<GlyphRecord>>;
}

/// In-memory glyph source over pre-extracted page data.
///
/// Used by hosts that extract glyphs once up front, by the test suite, and by
/// the `glyph_probe` tool (which loads one from a JSON dump).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticGlyphSource {
    pages: Vec<Vec<GlyphRecord>>,
    #[serde(default)]
    capabilities: Option<u32>,
}

impl StaticGlyphSource {
    /// Create a source from per-page glyph records.
    pub fn from_pages(pages: Vec<Vec<GlyphRecord>>) -> Self {
        Self {
            pages,
            capabilities: None,
        }
    }

    /// Restrict the advertised capabilities.
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.capabilities = Some(caps.bits());
        self
    }
}

impl GlyphSource for StaticGlyphSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
            .and_then(Capabilities::from_bits)
            .unwrap_or_else(Capabilities::all)
    }

    fn glyph_records(&self, page: usize) -> Result<Vec<GlyphRecord>> {
        self.pages
            .get(page)
            .cloned()
            .ok_or(Error::PageOutOfBounds {
                page,
                page_count: self.pages.len(),
            })
    }
}
