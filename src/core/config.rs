//! Options for turning a deck into JSON text and HTML files
//!
//! Both option sets follow the same pattern: a `Default` carrying the values
//! the deck.gl Jupyter widget uses, plus `with_*` methods for overrides.

use std::path::PathBuf;

use crate::core::constants::{DEFAULT_IFRAME_HEIGHT, DEFAULT_IFRAME_WIDTH};

/// Formatting knobs for [`crate::JsonNode::to_json_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Spaces per indentation level, `None` for compact output.
    pub indent: Option<usize>,
    /// Sort object keys recursively instead of keeping insertion order.
    pub sort_keys: bool,
}

impl JsonOptions {
    /// Single-line output without whitespace.
    pub fn compact() -> Self {
        Self {
            indent: None,
            sort_keys: false,
        }
    }

    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_sorted_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            sort_keys: false,
        }
    }
}

/// Controls where [`crate::Deck::to_html`] writes and what it does afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    /// Output file. A fresh name is generated when absent.
    pub filename: Option<PathBuf>,
    /// Directory for relative and generated names; the working directory
    /// when absent.
    pub output_dir: Option<PathBuf>,
    /// Open the written file in the default browser.
    pub open_browser: bool,
    /// Show the page in an inline frame through the deck's display strategy.
    pub notebook_display: bool,
    pub iframe_width: u32,
    pub iframe_height: u32,
}

impl HtmlOptions {
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_open_browser(mut self, enabled: bool) -> Self {
        self.open_browser = enabled;
        self
    }

    pub fn with_notebook_display(mut self, enabled: bool) -> Self {
        self.notebook_display = enabled;
        self
    }

    /// Set the inline frame size in pixels
    pub fn with_iframe_size(mut self, width: u32, height: u32) -> Self {
        self.iframe_width = width;
        self.iframe_height = height;
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            filename: None,
            output_dir: None,
            open_browser: false,
            notebook_display: true,
            iframe_width: DEFAULT_IFRAME_WIDTH,
            iframe_height: DEFAULT_IFRAME_HEIGHT,
        }
    }
}
