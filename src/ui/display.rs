//! Where rendered HTML goes
//!
//! Notebook display is chosen by the caller, not sniffed from the
//! environment: a deck carries a [`DisplayStrategy`] and hands it the inline
//! frame after writing an HTML file.

use std::io::Write;

use crate::Result;

/// Shows an HTML fragment to the user
pub trait DisplayStrategy: std::fmt::Debug + Send + Sync {
    fn show_html(&self, html: &str) -> Result<()>;
}

/// Displays nothing. The default outside notebooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl DisplayStrategy for Headless {
    fn show_html(&self, _html: &str) -> Result<()> {
        Ok(())
    }
}

/// Rich output for the evcxr Jupyter kernel.
///
/// evcxr renders anything a cell prints between its content markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvcxrDisplay;

impl EvcxrDisplay {
    fn write_block(out: &mut impl Write, html: &str) -> std::io::Result<()> {
        writeln!(out, "EVCXR_BEGIN_CONTENT text/html")?;
        writeln!(out, "{html}")?;
        writeln!(out, "EVCXR_END_CONTENT")?;
        out.flush()
    }
}

impl DisplayStrategy for EvcxrDisplay {
    fn show_html(&self, html: &str) -> Result<()> {
        let stdout = std::io::stdout();
        Self::write_block(&mut stdout.lock(), html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evcxr_block_markers() {
        let mut out = Vec::new();
        EvcxrDisplay::write_block(&mut out, "<p>hi</p>").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "EVCXR_BEGIN_CONTENT text/html\n<p>hi</p>\nEVCXR_END_CONTENT\n"
        );
    }

    #[test]
    fn test_headless_is_silent() {
        assert!(Headless.show_html("<p>ignored</p>").is_ok());
    }
}
