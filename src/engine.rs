//! Engine facade tying a glyph source to selection and search.
//!
//! [`TextEngine`] owns the glyph source and a single-slot cache holding the
//! reconstructed [`LineIndex`] of at most one page. Assembly is the expensive
//! step (a live source typically re-interprets the page content stream), so
//! the cache is rebuilt only when an operation touches a page other than the
//! cached one. Rebuild and use share one critical section: concurrent
//! selection and search calls serialize instead of racing to rebuild.

use std::sync::Mutex;

use regex::Regex;

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::glyph::{Capabilities, GlyphSource};
use crate::layout::{LineAssembler, LineIndex};
use crate::search::{LineSearcher, SearchOptions, SearchResult};
use crate::selection::{Selection, SelectionMode, SelectionResolver};

/// Selection and search engine over a glyph source.
///
/// Safe to share across threads (`Arc<TextEngine<S>>`) when the source is;
/// a UI thread resolving selections and a background task running a search
/// serialize on the page cache per page, never across a whole document scan.
pub struct TextEngine<S> {
    source: S,
    config: EngineConfig,
    assembler: LineAssembler,
    cache: Mutex<Option<LineIndex>>,
}

impl<S: GlyphSource> TextEngine<S> {
    /// Create an engine with default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(source: S, config: EngineConfig) -> Self {
        let assembler = LineAssembler::with_config(&config);
        Self {
            source,
            config,
            assembler,
            cache: Mutex::new(None),
        }
    }

    /// Number of pages in the underlying document.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    /// Operations the underlying source supports.
    pub fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    /// Resolve a selection gesture on a page.
    ///
    /// `start` and `end` are the gesture endpoints in page coordinates, in
    /// any order. Returns `Ok(None)` when the gesture touches no text, which
    /// is the routine outcome for drags over margins and images.
    pub fn select(
        &self,
        page: usize,
        start: Point,
        end: Point,
        mode: SelectionMode,
    ) -> Result<Option<Selection>> {
        self.check_capability(Capabilities::SELECTION, "selection")?;
        self.check_page(page)?;
        self.with_page_index(page, |index| {
            SelectionResolver::resolve(index, start, end, mode)
        })
    }

    /// Search the whole document (or the configured page range) for a
    /// literal needle.
    ///
    /// Results are sorted by [`SearchResult::document_order`]. An empty or
    /// whitespace-only needle yields no results. The page cache is locked
    /// per page, so selection calls interleave with a long scan.
    pub fn search(&self, needle: &str, options: &SearchOptions) -> Result<Vec<SearchResult>> {
        self.check_capability(Capabilities::SEARCH, "search")?;

        if needle.trim().is_empty() {
            log::debug!("blank search needle, returning no results");
            return Ok(Vec::new());
        }
        let page_count = self.source.page_count();
        if page_count == 0 {
            return Ok(Vec::new());
        }

        let regex = LineSearcher::build_regex(needle, options)?;
        let (start_page, end_page) = options.page_range.unwrap_or((0, page_count - 1));
        let end_page = end_page.min(page_count - 1);

        let mut results = Vec::new();
        for page in start_page..=end_page {
            let page_results = self.scan_page(page, &regex, needle)?;
            results.extend(page_results);

            if options.max_results > 0 && results.len() >= options.max_results {
                results.truncate(options.max_results);
                break;
            }
        }

        results.sort_by(|a, b| a.document_order(b));
        log::debug!("search for {:?} found {} results", needle, results.len());
        Ok(results)
    }

    /// Search a single page for a literal needle.
    ///
    /// The per-page unit of a document scan. Hosts driving the scan
    /// themselves call this page by page and simply stop calling to cancel;
    /// there is no cancellation point inside a page.
    pub fn search_page(
        &self,
        page: usize,
        needle: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>> {
        self.check_capability(Capabilities::SEARCH, "search")?;
        self.check_page(page)?;

        if needle.trim().is_empty() {
            return Ok(Vec::new());
        }

        let regex = LineSearcher::build_regex(needle, options)?;
        let mut results = self.scan_page(page, &regex, needle)?;
        if options.max_results > 0 && results.len() > options.max_results {
            results.truncate(options.max_results);
        }
        Ok(results)
    }

    /// Full text of a page, reconstructed lines joined with `\n`.
    pub fn page_text(&self, page: usize) -> Result<String> {
        self.check_capability(Capabilities::SELECTION, "text extraction")?;
        self.check_page(page)?;
        self.with_page_index(page, |index| index.page_text())
    }

    /// Visual bounds of every glyph whose origin falls inside `region`.
    pub fn glyph_rects_in(&self, page: usize, region: Rect) -> Result<Vec<Rect>> {
        self.check_capability(Capabilities::SELECTION, "selection")?;
        self.check_page(page)?;
        self.with_page_index(page, |index| index.glyph_rects_in(&region))
    }

    /// Drop the cached page state.
    ///
    /// The next operation rebuilds from the source. Hosts call this when the
    /// underlying document content changes.
    pub fn invalidate(&self) {
        let mut slot = self.cache.lock().unwrap();
        if let Some(index) = slot.take() {
            log::debug!("invalidated cached line index for page {}", index.page());
        }
    }

    /// The page currently held in the cache, if any.
    pub fn cached_page(&self) -> Option<usize> {
        self.cache.lock().unwrap().as_ref().map(LineIndex::page)
    }

    /// Run `f` over the line index for `page` inside the cache's critical
    /// section, rebuilding first unless `page` is already cached.
    ///
    /// A failed rebuild leaves the cache empty rather than holding a stale
    /// index for another page.
    fn with_page_index<T>(&self, page: usize, f: impl FnOnce(&LineIndex) -> T) -> Result<T> {
        let mut slot = self.cache.lock().unwrap();

        let index = match slot.take() {
            Some(index) if index.page() == page => {
                log::trace!("line index cache hit for page {}", page);
                index
            },
            _ => {
                log::debug!("rebuilding line index for page {}", page);
                let glyphs = self.source.glyph_records(page)?;
                self.assembler.assemble(page, glyphs)?
            },
        };

        let result = f(&index);
        *slot = Some(index);
        Ok(result)
    }

    fn scan_page(&self, page: usize, regex: &Regex, needle: &str) -> Result<Vec<SearchResult>> {
        self.with_page_index(page, |index| {
            LineSearcher::search_index(index, regex, needle, self.config.marker_margin)
        })
    }

    fn check_page(&self, page: usize) -> Result<()> {
        let page_count = self.source.page_count();
        if page >= page_count {
            return Err(Error::PageOutOfBounds { page, page_count });
        }
        Ok(())
    }

    fn check_capability(&self, needed: Capabilities, operation: &'static str) -> Result<()> {
        if !self.source.capabilities().contains(needed) {
            return Err(Error::CapabilityUnavailable { operation });
        }
        Ok(())
    }
}
