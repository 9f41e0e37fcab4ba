//! Error types for the selection engine.
//!
//! This module defines all error types that can occur while assembling lines,
//! resolving selections, or computing search markers.

/// Result type alias for selection engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during selection and search processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested page does not exist in the source document
    #[error("Page {page} out of bounds (document has {page_count} pages)")]
    PageOutOfBounds {
        /// Requested page index (0-based)
        page: usize,
        /// Total number of pages in the document
        page_count: usize,
    },

    /// The glyph source does not support the requested operation
    #[error("Source does not support {operation}")]
    CapabilityUnavailable {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// A glyph record carried font metrics the engine cannot use
    #[error("Unusable font metrics for glyph {glyph:?} on page {page}: {reason}")]
    FontMetrics {
        /// Page the glyph was reported on
        page: usize,
        /// Decoded text of the offending glyph
        glyph: String,
        /// Reason the metrics were rejected
        reason: String,
    },

    /// A glyph record carried non-finite or otherwise malformed geometry
    #[error("Malformed glyph geometry on page {page}: {reason}")]
    MalformedGlyph {
        /// Page the glyph was reported on
        page: usize,
        /// Reason the geometry was rejected
        reason: String,
    },

    /// The upstream glyph source failed to produce records
    #[error("Glyph source failed on page {page}: {reason}")]
    Source {
        /// Page the source was asked for
        page: usize,
        /// Source-reported failure description
        reason: String,
    },

    /// Invalid search pattern
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_out_of_bounds_error() {
        let err = Error::PageOutOfBounds {
            page: 12,
            page_count: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("12"));
        assert!(msg.contains("4 pages"));
    }

    #[test]
    fn test_capability_unavailable_error() {
        let err = Error::CapabilityUnavailable {
            operation: "search",
        };
        let msg = format!("{}", err);
        assert!(msg.contains("search"));
    }

    #[test]
    fn test_font_metrics_error() {
        let err = Error::FontMetrics {
            page: 3,
            glyph: "a".to_string(),
            reason: "zero font size".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 3"));
        assert!(msg.contains("zero font size"));
    }

    #[test]
    fn test_source_error() {
        let err = Error::Source {
            page: 0,
            reason: "content stream truncated".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 0"));
        assert!(msg.contains("content stream truncated"));
    }

    #[test]
    fn test_invalid_pattern_error() {
        let err = Error::InvalidPattern("unclosed group".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
