#![allow(dead_code)]
//! Integration tests for drag-gesture selection.
//!
//! Gestures are exercised against mock pages at every granularity, from the
//! resolver level up through the engine facade.

use pdf_select::{
    FontMetrics, GlyphRecord, LineAssembler, LineIndex, Point, Rect, Selection, SelectionMode,
    SelectionResolver, StaticGlyphSource, TextEngine,
};
use proptest::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn metrics() -> FontMetrics {
    FontMetrics::new(0.75, -0.25, 12.0)
}

/// A run of single-character glyphs, 10 units wide, starting at `x`.
fn glyph_run(text: &str, x: f32, y: f32) -> Vec<GlyphRecord> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            GlyphRecord::new(c.to_string(), x + i as f32 * 10.0, y, 10.0, 12.0, metrics())
        })
        .collect()
}

/// "AA BB CC" on one line at baseline 100; glyph midpoints at 5, 15, ..., 75.
fn word_page() -> LineIndex {
    LineAssembler::new()
        .assemble(0, glyph_run("AA BB CC", 0.0, 100.0))
        .expect("assembly failed")
}

/// Three lines at baselines 100, 200, 300.
fn paragraph_page() -> LineIndex {
    let mut glyphs = glyph_run("first line", 0.0, 100.0);
    glyphs.extend(glyph_run("second line", 0.0, 200.0));
    glyphs.extend(glyph_run("third", 0.0, 300.0));
    LineAssembler::new()
        .assemble(0, glyphs)
        .expect("assembly failed")
}

fn resolve(
    index: &LineIndex,
    start: (f32, f32),
    end: (f32, f32),
    mode: SelectionMode,
) -> Option<Selection> {
    SelectionResolver::resolve(
        index,
        Point::new(start.0, start.1),
        Point::new(end.0, end.1),
        mode,
    )
}

// ============================================================================
// Character Granularity
// ============================================================================

#[test]
fn test_character_full_width_drag_selects_whole_line() {
    let index = word_page();
    let selection = resolve(&index, (0.0, 100.0), (80.0, 100.0), SelectionMode::Character)
        .expect("selection expected");
    assert_eq!(selection.text, "AA BB CC");
    assert_eq!(selection.markers, vec![Rect::new(0.0, 91.0, 80.0, 12.0)]);
}

#[test]
fn test_character_drag_respects_glyph_midpoints() {
    let index = word_page();
    // 12 is past the first glyph's midpoint (5), 48 is past the fifth's (45)
    let selection = resolve(&index, (12.0, 100.0), (48.0, 100.0), SelectionMode::Character)
        .expect("selection expected");
    assert_eq!(selection.text, "A BB");
    assert_eq!(selection.markers, vec![Rect::new(10.0, 91.0, 40.0, 12.0)]);
}

#[test]
fn test_character_drag_within_one_glyph_selects_nothing() {
    let index = word_page();
    // Both boundaries resolve to glyph 0; a one-glyph range is not a drag
    assert!(resolve(&index, (2.0, 100.0), (8.0, 100.0), SelectionMode::Character).is_none());
}

// ============================================================================
// Word Granularity
// ============================================================================

#[test]
fn test_word_drag_inside_one_word_selects_it() {
    let index = word_page();
    let selection = resolve(&index, (38.0, 100.0), (42.0, 100.0), SelectionMode::Word)
        .expect("selection expected");
    assert_eq!(selection.text, "BB");
    assert_eq!(selection.markers, vec![Rect::new(30.0, 91.0, 20.0, 12.0)]);
}

#[test]
fn test_word_drag_right_of_text_snaps_to_last_word() {
    let index = word_page();
    let selection = resolve(&index, (90.0, 100.0), (95.0, 100.0), SelectionMode::Word)
        .expect("selection expected");
    assert_eq!(selection.text, "CC");
}

#[test]
fn test_word_drag_spanning_words_extends_both_ends() {
    let index = word_page();
    // 8 lands mid-"AA", 72 mid-"CC": both words are taken whole
    let selection = resolve(&index, (8.0, 100.0), (72.0, 100.0), SelectionMode::Word)
        .expect("selection expected");
    assert_eq!(selection.text, "AA BB CC");
}

// ============================================================================
// Line Granularity
// ============================================================================

#[test]
fn test_line_mode_ignores_horizontal_range() {
    let index = word_page();
    for (start, end) in [(40.0, 42.0), (0.0, 0.0), (200.0, 300.0)] {
        let selection = resolve(&index, (start, 100.0), (end, 100.0), SelectionMode::Line)
            .expect("selection expected");
        assert_eq!(selection.text, "AA BB CC");
        assert_eq!(selection.markers, vec![Rect::new(0.0, 91.0, 80.0, 12.0)]);
    }
}

// ============================================================================
// Multi-Line Gestures
// ============================================================================

#[test]
fn test_multi_line_drag_concatenates_with_newlines() {
    let index = paragraph_page();
    let selection = resolve(&index, (20.0, 100.0), (25.0, 300.0), SelectionMode::Character)
        .expect("selection expected");
    // Lead line from start.x, middle line whole, final line up to end.x
    assert_eq!(selection.text, "rst line\nsecond line\nthi");
    assert_eq!(selection.markers.len(), 3);
}

#[test]
fn test_multi_line_newline_survives_empty_lead_line() {
    let index = paragraph_page();
    // start.x is right of the whole first line, so it contributes no glyphs
    let selection = resolve(&index, (200.0, 100.0), (25.0, 300.0), SelectionMode::Character)
        .expect("selection expected");
    assert_eq!(selection.text, "\nsecond line\nthi");
    assert_eq!(selection.markers.len(), 2);
}

#[test]
fn test_gesture_in_gap_between_lines() {
    let index = paragraph_page();
    // Both points sit between the first two lines: the y-searches bracket
    // the gap in reverse order, taking the lower line from start.x rightward
    let selection = resolve(&index, (5.0, 150.0), (5.0, 150.0), SelectionMode::Character)
        .expect("selection expected");
    assert_eq!(selection.text, "second line\n");
    assert_eq!(selection.markers.len(), 1);
}

#[test]
fn test_drag_outside_all_text_is_none() {
    let index = paragraph_page();
    assert!(resolve(&index, (0.0, 10.0), (50.0, 20.0), SelectionMode::Character).is_none());
    assert!(resolve(&index, (0.0, 400.0), (50.0, 450.0), SelectionMode::Character).is_none());
}

// ============================================================================
// Engine Facade
// ============================================================================

#[test]
fn test_engine_select_reports_page_number() {
    let pages = vec![glyph_run("alpha", 0.0, 100.0), glyph_run("beta gamma", 0.0, 100.0)];
    let engine = TextEngine::new(StaticGlyphSource::from_pages(pages));

    let selection = engine
        .select(1, Point::new(32.0, 100.0), Point::new(38.0, 100.0), SelectionMode::Word)
        .expect("select failed")
        .expect("selection expected");
    assert_eq!(selection.page, 1);
    assert_eq!(selection.text, "beta");
}

#[test]
fn test_engine_click_counts_map_to_modes() {
    let pages = vec![glyph_run("AA BB CC", 0.0, 100.0)];
    let engine = TextEngine::new(StaticGlyphSource::from_pages(pages));
    let a = Point::new(38.0, 100.0);
    let b = Point::new(42.0, 100.0);

    // Double click selects the word, triple click the line
    let double = engine
        .select(0, a, b, SelectionMode::for_click_count(2))
        .expect("select failed")
        .expect("selection expected");
    assert_eq!(double.text, "BB");

    let triple = engine
        .select(0, a, b, SelectionMode::for_click_count(3))
        .expect("select failed")
        .expect("selection expected");
    assert_eq!(triple.text, "AA BB CC");

    // Single click drags are character-granular: a one-glyph range is empty
    assert!(engine
        .select(0, a, b, SelectionMode::for_click_count(1))
        .expect("select failed")
        .is_none());
}

#[test]
fn test_scaled_markers_track_device_zoom() {
    let index = word_page();
    let selection = resolve(&index, (0.0, 100.0), (80.0, 100.0), SelectionMode::Character)
        .expect("selection expected");
    assert_eq!(selection.scaled_markers(2.0), vec![Rect::new(0.0, 182.0, 160.0, 24.0)]);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// The resolver normalizes the gesture, so point order never matters.
    #[test]
    fn test_swapping_gesture_points_never_changes_selection(
        x1 in 0u16..=120, y1 in 0u16..=400,
        x2 in 0u16..=120, y2 in 0u16..=400,
    ) {
        let index = paragraph_page();
        let a = Point::new(f32::from(x1), f32::from(y1));
        let b = Point::new(f32::from(x2), f32::from(y2));
        for mode in [SelectionMode::Character, SelectionMode::Word, SelectionMode::Line] {
            prop_assert_eq!(
                SelectionResolver::resolve(&index, a, b, mode),
                SelectionResolver::resolve(&index, b, a, mode)
            );
        }
    }

    /// Every marker a gesture produces stays inside the page's text band.
    #[test]
    fn test_markers_are_well_formed(
        x1 in 0u16..=120, y1 in 0u16..=400,
        x2 in 0u16..=120, y2 in 0u16..=400,
    ) {
        let index = paragraph_page();
        let a = Point::new(f32::from(x1), f32::from(y1));
        let b = Point::new(f32::from(x2), f32::from(y2));
        if let Some(selection) = SelectionResolver::resolve(&index, a, b, SelectionMode::Character) {
            for marker in &selection.markers {
                prop_assert!(marker.width >= 0.0);
                prop_assert!(marker.height > 0.0);
                prop_assert!(marker.left() >= 0.0);
                prop_assert!(marker.right() <= 110.0);
                prop_assert!(marker.top() >= 91.0);
                prop_assert!(marker.bottom() <= 303.0);
            }
        }
    }
}
