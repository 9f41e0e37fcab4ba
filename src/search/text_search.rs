//! Search options, results, and the per-line match scan.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::{LineIndex, TextLine};
use crate::search::marker;
use crate::utils::safe_float_cmp;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Options for text search.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Case insensitive search (the default; viewers search this way)
    pub case_insensitive: bool,
    /// Maximum number of results (0 = unlimited)
    pub max_results: usize,
    /// Page range to search, inclusive (None = all pages)
    pub page_range: Option<(usize, usize)>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            max_results: 0,
            page_range: None,
        }
    }
}

impl SearchOptions {
    /// Create new default search options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Limit the number of results.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Search only within a page range (inclusive).
    pub fn with_page_range(mut self, start: usize, end: usize) -> Self {
        self.page_range = Some((start, end));
        self
    }
}

/// A search hit on one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The text that was searched for
    pub query: String,
    /// Full text of the line containing the match
    pub snippet: String,
    /// Page number (0-based) where the match was found
    pub page: usize,
    /// Highlight rectangle around the matched glyphs, in page coordinates
    pub marker: Rect,
}

impl SearchResult {
    /// Total order over results: by page, then by marker top edge.
    ///
    /// Full-document searches return their results sorted by this order, so
    /// a result list reads top to bottom through the document.
    pub fn document_order(&self, other: &SearchResult) -> Ordering {
        self.page
            .cmp(&other.page)
            .then_with(|| safe_float_cmp(self.marker.top(), other.marker.top()))
    }

    /// Marker mapped into device space for a given zoom factor.
    pub fn scaled_marker(&self, scale: f32) -> Rect {
        self.marker.scaled(scale)
    }
}

/// Scans reconstructed lines for needle matches.
pub struct LineSearcher;

impl LineSearcher {
    /// Build the matcher for a literal needle.
    ///
    /// The needle is escaped, so regex metacharacters in user input match
    /// themselves.
    pub(crate) fn build_regex(needle: &str, options: &SearchOptions) -> Result<Regex> {
        RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(options.case_insensitive)
            .build()
            .map_err(|e| Error::InvalidPattern(e.to_string()))
    }

    /// Find every line in the index matching the needle.
    ///
    /// One result per matched line, keyed on the first occurrence; further
    /// occurrences on the same line do not produce additional markers.
    pub fn search_index(
        index: &LineIndex,
        regex: &Regex,
        query: &str,
        margin: f32,
    ) -> Vec<SearchResult> {
        index
            .lines()
            .iter()
            .filter_map(|line| Self::search_line(line, regex, query, index.page(), margin))
            .collect()
    }

    fn search_line(
        line: &TextLine,
        regex: &Regex,
        query: &str,
        page: usize,
        margin: f32,
    ) -> Option<SearchResult> {
        let text = line.text();
        let mat = regex.find(&text)?;

        // regex reports byte offsets; the glyph correction needs code points
        let char_offset = text[..mat.start()].chars().count();
        let match_len = mat.as_str().chars().count();

        let Some(rect) = marker::marker_for_match(line.glyphs(), char_offset, match_len, margin)
        else {
            log::debug!(
                "match {:?} at offset {} on page {} has no glyph span, skipping",
                mat.as_str(),
                char_offset,
                page
            );
            return None;
        };

        Some(SearchResult {
            query: query.to_string(),
            snippet: text,
            page,
            marker: rect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{FontMetrics, GlyphRecord};
    use crate::layout::LineAssembler;

    fn glyph(text: &str, x: f32, y: f32) -> GlyphRecord {
        let width = 10.0 * text.chars().count().max(1) as f32;
        GlyphRecord::new(text, x, y, width, 12.0, FontMetrics::new(0.75, -0.25, 12.0))
    }

    fn index_of(lines: &[&str]) -> LineIndex {
        let mut glyphs = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let y = 100.0 + row as f32 * 50.0;
            for (col, c) in line.chars().enumerate() {
                glyphs.push(glyph(&c.to_string(), col as f32 * 10.0, y));
            }
        }
        LineAssembler::new().assemble(0, glyphs).unwrap()
    }

    #[test]
    fn test_search_options_default() {
        let opts = SearchOptions::default();
        assert!(opts.case_insensitive);
        assert_eq!(opts.max_results, 0);
        assert!(opts.page_range.is_none());
    }

    #[test]
    fn test_search_options_builder() {
        let opts = SearchOptions::new()
            .with_case_insensitive(false)
            .with_max_results(10)
            .with_page_range(0, 5);

        assert!(!opts.case_insensitive);
        assert_eq!(opts.max_results, 10);
        assert_eq!(opts.page_range, Some((0, 5)));
    }

    #[test]
    fn test_build_regex_case_insensitive_by_default() {
        let regex = LineSearcher::build_regex("hello", &SearchOptions::new()).unwrap();
        assert!(regex.is_match("say HELLO there"));
        assert!(regex.is_match("hello"));
    }

    #[test]
    fn test_build_regex_case_sensitive() {
        let opts = SearchOptions::new().with_case_insensitive(false);
        let regex = LineSearcher::build_regex("hello", &opts).unwrap();
        assert!(regex.is_match("hello"));
        assert!(!regex.is_match("HELLO"));
    }

    #[test]
    fn test_build_regex_escapes_metacharacters() {
        let regex = LineSearcher::build_regex("a.b", &SearchOptions::new()).unwrap();
        assert!(regex.is_match("a.b"));
        assert!(!regex.is_match("axb"));
    }

    #[test]
    fn test_search_index_one_result_per_line() {
        let index = index_of(&["the cat and the dog", "nothing here", "the end"]);
        let regex = LineSearcher::build_regex("the", &SearchOptions::new()).unwrap();
        let results = LineSearcher::search_index(&index, &regex, "the", 2.0);

        // "the" appears twice on the first line but yields one marker
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].snippet, "the cat and the dog");
        assert_eq!(results[1].snippet, "the end");
        assert_eq!(results[0].query, "the");
    }

    #[test]
    fn test_search_index_marker_position() {
        let index = index_of(&["abcdef"]);
        let regex = LineSearcher::build_regex("cd", &SearchOptions::new()).unwrap();
        let results = LineSearcher::search_index(&index, &regex, "cd", 0.0);

        assert_eq!(results.len(), 1);
        // "cd" covers glyphs at x = 20 and x = 30
        assert_eq!(results[0].marker.left(), 20.0);
        assert_eq!(results[0].marker.right(), 40.0);
    }

    #[test]
    fn test_document_order() {
        let early = SearchResult {
            query: "x".to_string(),
            snippet: "x".to_string(),
            page: 0,
            marker: Rect::new(0.0, 10.0, 5.0, 5.0),
        };
        let later_on_page = SearchResult {
            marker: Rect::new(0.0, 90.0, 5.0, 5.0),
            ..early.clone()
        };
        let later_page = SearchResult {
            page: 3,
            ..early.clone()
        };

        assert_eq!(early.document_order(&later_on_page), Ordering::Less);
        assert_eq!(later_on_page.document_order(&early), Ordering::Greater);
        assert_eq!(early.document_order(&later_page), Ordering::Less);
        assert_eq!(early.document_order(&early.clone()), Ordering::Equal);
    }

    #[test]
    fn test_scaled_marker() {
        let result = SearchResult {
            query: "x".to_string(),
            snippet: "x".to_string(),
            page: 0,
            marker: Rect::new(10.0, 20.0, 30.0, 40.0),
        };
        assert_eq!(result.scaled_marker(0.5), Rect::new(5.0, 10.0, 15.0, 20.0));
    }
}
