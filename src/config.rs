//! Configuration for the selection engine.

/// Engine tuning knobs.
///
/// The defaults reproduce the behavior of the desktop viewers this engine was
/// built for; most hosts never need to change them.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Margin in page units added around search markers.
    pub marker_margin: f32,

    /// Line membership tolerance as a fraction of the previous glyph's
    /// height. A glyph within `height * line_tolerance` of the previous
    /// glyph's baseline joins its line.
    pub line_tolerance: f32,

    /// Stable-sort assembled lines by their top edge.
    ///
    /// Interpreter encounter order is usually top-to-bottom but not
    /// guaranteed; sorting keeps the line boundary searches valid either way.
    /// Hosts whose interpreter guarantees reading order can switch this off
    /// to preserve that order exactly.
    pub sorted_lines: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            marker_margin: 2.0,
            line_tolerance: 0.5,
            sorted_lines: true,
        }
    }

    /// Set the search marker margin in page units.
    pub fn with_marker_margin(mut self, margin: f32) -> Self {
        self.marker_margin = margin;
        self
    }

    /// Set the line membership tolerance factor.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Enable or disable sorting assembled lines by top edge.
    pub fn with_sorted_lines(mut self, enable: bool) -> Self {
        self.sorted_lines = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.marker_margin, 2.0);
        assert_eq!(config.line_tolerance, 0.5);
        assert!(config.sorted_lines);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_marker_margin(0.0)
            .with_line_tolerance(0.3)
            .with_sorted_lines(false);
        assert_eq!(config.marker_margin, 0.0);
        assert_eq!(config.line_tolerance, 0.3);
        assert!(!config.sorted_lines);
    }
}
