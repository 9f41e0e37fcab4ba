//! Glyph stream to line index assembly.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::glyph::GlyphRecord;
use crate::layout::{LineIndex, TextLine};
use crate::utils::safe_float_cmp;

/// Assembles an interpreter's glyph stream into the ordered lines of a page.
///
/// Glyphs are consumed in arrival order with a single current-line
/// accumulator: a glyph whose baseline lies within half a glyph height of the
/// current line's last glyph joins that line, anything else closes the line
/// and starts a new one. Arrival order only needs to be locally coherent;
/// after assembly the lines are stable-sorted by top edge unless the
/// configuration says the interpreter already guarantees reading order.
#[derive(Debug, Clone)]
pub struct LineAssembler {
    line_tolerance: f32,
    sorted_lines: bool,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create an assembler with default configuration.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create an assembler from engine configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            line_tolerance: config.line_tolerance,
            sorted_lines: config.sorted_lines,
        }
    }

    /// Assemble the glyph records of one page into a [`LineIndex`].
    ///
    /// Every record is validated first; a record with unusable font metrics
    /// or non-finite geometry fails the whole assembly. An empty record
    /// stream produces an empty index.
    pub fn assemble(&self, page: usize, glyphs: Vec<GlyphRecord>) -> Result<LineIndex> {
        let glyph_count = glyphs.len();
        let mut lines: Vec<TextLine> = Vec::new();

        for glyph in glyphs {
            glyph.validate(page)?;
            match lines.last_mut() {
                Some(line) if line.accepts(&glyph, self.line_tolerance) => line.push(glyph),
                _ => lines.push(TextLine::new(glyph)),
            }
        }

        if self.sorted_lines {
            lines.sort_by(|a, b| safe_float_cmp(a.top(), b.top()));
        }

        log::debug!(
            "assembled page {}: {} glyphs into {} lines",
            page,
            glyph_count,
            lines.len()
        );

        Ok(LineIndex::new(page, lines))
    }
}
