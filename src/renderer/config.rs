//! Configuration for SVG overlay rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Width of the plotting area
    pub width: f64,

    /// Height of the plotting area; the 0-100 vertical scale maps onto it
    pub height: f64,

    /// Padding around the plotting area in the viewBox
    pub viewbox_padding: f64,

    /// Days of margin added on both sides of the date domain
    pub day_padding: f64,

    /// Maximum characters per label line before wrapping
    pub label_max_chars: usize,

    /// Vertical distance between wrapped label lines
    pub line_height: f64,

    /// Distance between a label block and the point its leader line targets
    pub leader_length: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "bu-" for "bu-label")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            viewbox_padding: 40.0,
            day_padding: 3.0,
            label_max_chars: 20,
            line_height: 11.0,
            leader_length: 24.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("bu-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plotting area size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set the margin, in days, around the date domain
    pub fn with_day_padding(mut self, days: f64) -> Self {
        self.day_padding = days;
        self
    }

    /// Set the label wrapping width
    pub fn with_label_max_chars(mut self, max_chars: usize) -> Self {
        self.label_max_chars = max_chars;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
