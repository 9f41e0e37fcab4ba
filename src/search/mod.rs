//! Text search with highlight markers.
//!
//! This module locates a needle in the reconstructed lines of a page and
//! produces one tight marker rectangle per matched line, correcting for
//! glyphs whose decoded text is longer than one code point (ligatures).
//! Supports:
//! - Case-insensitive literal search (the default)
//! - Result limits and page ranges
//! - Document-order sorting of results
//!
//! ## Example
//!
//! ```ignore
//! use pdf_select::{SearchOptions, TextEngine};
//!
//! let engine = TextEngine::new(source);
//! let results = engine.search("hello", &SearchOptions::new())?;
//! for result in results {
//!     println!("page {}: {:?} in {:?}", result.page, result.marker, result.snippet);
//! }
//! ```

pub mod marker;
mod text_search;

pub use text_search::{LineSearcher, SearchOptions, SearchResult};
