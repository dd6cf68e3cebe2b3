//! Standalone HTML output
//!
//! The page loads the deck.gl widget bundle through RequireJS from a CDN
//! and calls its `createDeck` entry point with the inlined configuration.
//! Viewing it needs network access.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        config::HtmlOptions,
        constants::{
            DECKGL_BUNDLE_URL, HTML_FILE_PREFIX, MAPBOX_GL_CSS_URL, MAPBOX_GL_JS_URL,
            REQUIREJS_URL,
        },
    },
    ui::{display::DisplayStrategy, tooltip::Tooltip, widget::Dimension},
    Error, Result,
};

const DECK_TEMPLATE: &str = include_str!("templates/deck.html");

/// Writes deck configurations to HTML files
#[derive(Debug, Clone, Copy)]
pub struct HtmlEmitter<'a> {
    display: &'a dyn DisplayStrategy,
}

impl<'a> HtmlEmitter<'a> {
    pub fn new(display: &'a dyn DisplayStrategy) -> Self {
        Self { display }
    }

    /// Renders the page for `json_input` without writing it anywhere.
    pub fn render(json_input: &str, mapbox_key: Option<&str>, tooltip: &Tooltip) -> Result<String> {
        let mapbox_key = serde_json::to_string(mapbox_key.unwrap_or_default())?;
        let tooltip = serde_json::to_string(tooltip)?;

        Ok(fill_template(
            DECK_TEMPLATE,
            &[
                ("mapbox_gl_js", MAPBOX_GL_JS_URL),
                ("mapbox_gl_css", MAPBOX_GL_CSS_URL),
                ("requirejs", REQUIREJS_URL),
                ("deckgl_bundle", DECKGL_BUNDLE_URL),
                ("json_input", &script_safe(json_input)),
                ("mapbox_key", &script_safe(&mapbox_key)),
                ("tooltip", &script_safe(&tooltip)),
            ],
        ))
    }

    /// Writes the page and returns its absolute path.
    ///
    /// A failure to open the browser is logged, not returned: the file exists
    /// at that point and the caller still gets its path.
    pub fn emit(
        &self,
        json_input: &str,
        mapbox_key: Option<&str>,
        options: &HtmlOptions,
        tooltip: &Tooltip,
    ) -> Result<PathBuf> {
        let page = Self::render(json_input, mapbox_key, tooltip)?;
        let target = resolve_filename(options);

        fs::write(&target, &page)?;
        let path = fs::canonicalize(&target)?;
        log::info!("wrote deck to {} ({} bytes)", path.display(), page.len());

        if options.open_browser {
            if let Err(e) = open_in_browser(&path) {
                log::warn!("Failed to open browser: {}", e);
            }
        }

        if options.notebook_display {
            let frame = iframe(
                &page,
                &Dimension::Pixels(options.iframe_width),
                &Dimension::Pixels(options.iframe_height),
            );
            self.display.show_html(&frame)?;
        }

        Ok(path)
    }
}

/// The explicit filename, or a fresh `decklet_<uuid>.html`; relative names
/// are placed in `output_dir` when one is set.
pub fn resolve_filename(options: &HtmlOptions) -> PathBuf {
    let name = options.filename.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "{HTML_FILE_PREFIX}{}.html",
            uuid::Uuid::new_v4().simple()
        ))
    });

    match &options.output_dir {
        Some(dir) if name.is_relative() => dir.join(name),
        _ => name,
    }
}

/// `file://` URL for an absolute path, percent-encoded.
pub fn file_url(path: &Path) -> Result<url::Url> {
    url::Url::from_file_path(path)
        .map_err(|()| Error::Browser(format!("not an absolute path: {}", path.display())))
}

#[cfg(feature = "browser")]
pub fn open_in_browser(path: &Path) -> Result<()> {
    let url = file_url(path)?;
    webbrowser::open(url.as_str()).map_err(|e| Error::Browser(format!("{url}: {e}")))
}

#[cfg(not(feature = "browser"))]
pub fn open_in_browser(path: &Path) -> Result<()> {
    Err(Error::Browser(format!(
        "cannot open {}: built without the `browser` feature",
        path.display()
    )))
}

/// Inline frame embedding a whole page.
pub fn iframe(page: &str, width: &Dimension, height: &Dimension) -> String {
    format!(
        r#"<iframe srcdoc="{}" style="width: {}; height: {}; border: none;"></iframe>"#,
        escape_html(page),
        width.to_css(),
        height.to_css()
    )
}

/// Escapes text for HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Keeps inlined JSON from closing the surrounding `<script>` element or
/// opening a comment in it. `<` only occurs inside JSON strings, where
/// `\u003c` decodes back to the same text.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Replaces `{{name}}` placeholders in one pass, so substituted text is
/// never scanned for further placeholders. Unknown names are kept.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template(
            "a {{x}} b {{y}} c {{unknown}} {{open",
            &[("x", "{{y}}"), ("y", "2")],
        );
        assert_eq!(filled, "a {{y}} b 2 c {{unknown}} {{open");
    }

    #[test]
    fn test_render_inlines_configuration() {
        let page = HtmlEmitter::render(
            r#"{"layers":[],"note":"</script>"}"#,
            Some("pk.test"),
            &Tooltip::Enabled(false),
        )
        .unwrap();

        assert!(page.contains(r#"const jsonInput = {"layers":[],"note":"\u003c/script>"};"#));
        assert!(page.contains(r#"const mapboxApiKey = "pk.test";"#));
        assert!(page.contains("const tooltip = false;"));
        assert!(page.contains(DECKGL_BUNDLE_URL));
        assert!(page.contains(REQUIREJS_URL));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_render_without_credential() {
        let page = HtmlEmitter::render("{}", None, &Tooltip::default()).unwrap();
        assert!(page.contains(r#"const mapboxApiKey = "";"#));
        assert!(page.contains("const tooltip = true;"));
    }

    #[test]
    fn test_script_safe_escapes_every_angle_bracket() {
        let json = r#"{"html":"<!-- <script>x</script>"}"#;
        let escaped = script_safe(json);
        assert!(!escaped.contains('<'));
        assert_eq!(
            escaped,
            r#"{"html":"\u003c!-- \u003cscript>x\u003c/script>"}"#
        );

        let decoded: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(decoded["html"], "<!-- <script>x</script>");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_is_percent_encoded() {
        let url = file_url(Path::new("/tmp/my maps/deck#1.html")).unwrap();
        assert_eq!(url.as_str(), "file:///tmp/my%20maps/deck%231.html");

        assert!(matches!(
            file_url(Path::new("relative.html")),
            Err(Error::Browser(_))
        ));
    }

    #[test]
    fn test_generated_names_are_fresh() {
        let options = HtmlOptions::default().with_output_dir("/tmp/out");
        let a = resolve_filename(&options);
        let b = resolve_filename(&options);
        assert_ne!(a, b);
        assert!(a.starts_with("/tmp/out"));
        let name = a.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(HTML_FILE_PREFIX));
        assert!(name.ends_with(".html"));
    }

    #[test]
    fn test_explicit_name_is_kept() {
        let options = HtmlOptions::default().with_filename("maps/city.html");
        assert_eq!(resolve_filename(&options), PathBuf::from("maps/city.html"));

        let options = options.with_output_dir("/srv");
        assert_eq!(resolve_filename(&options), PathBuf::from("/srv/maps/city.html"));
    }

    #[test]
    fn test_iframe_escapes_page() {
        let frame = iframe(
            r#"<p class="x">&</p>"#,
            &Dimension::Pixels(700),
            &Dimension::from("100%"),
        );
        assert_eq!(
            frame,
            r#"<iframe srcdoc="&lt;p class=&quot;x&quot;&gt;&amp;&lt;/p&gt;" style="width: 700px; height: 100%; border: none;"></iframe>"#
        );
    }
}
