//! Hover tooltips
//!
//! The deck.gl widget turns the tooltip setting into a `getTooltip` callback
//! in the browser. [`Tooltip::render`] reproduces what that callback shows
//! for a picked object, so tooltips can be previewed and tested from Rust.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    core::constants::{TOOLTIP_ARRAY_PREVIEW_LIMIT, TOOLTIP_VALUE_MAX_LENGTH},
    io::html::escape_html,
    json::JsonMap,
};

/// Style applied to tooltips that do not bring their own.
pub static DEFAULT_TOOLTIP_STYLE: Lazy<JsonMap> = Lazy::new(|| {
    match json!({
        "fontFamily": "\"Helvetica Neue\", Helvetica, Arial, sans-serif",
        "display": "flex",
        "flex": "wrap",
        "maxWidth": "500px",
        "flexDirection": "column",
        "zIndex": 2
    }) {
        Value::Object(map) => map,
        _ => JsonMap::new(),
    }
});

/// Picked-object keys left out of the default table.
const EXCLUDED_KEYS: [&str; 2] = ["position", "index"];

const HEADER_STYLE: &str = "font-weight: 700; margin-right: 10px; flex: 1;";
const VALUE_STYLE: &str =
    "flex: none; max-width: 250px; overflow: hidden; white-space: nowrap; text-overflow: ellipsis;";
const ROW_STYLE: &str =
    "display: flex; flex-direction: row; justify-content: space-between; align-items: stretch;";

/// Tooltip setting of a deck: on/off, or a template.
///
/// Layers must be `pickable` for any tooltip to appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tooltip {
    Enabled(bool),
    Custom(TooltipTemplate),
}

/// `{key}` placeholders in `html`/`text` are filled from the picked object.
/// `text` takes precedence over `html`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// CSS properties in camelCase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<JsonMap>,
}

impl TooltipTemplate {
    pub fn html(template: impl Into<String>) -> Self {
        Self {
            html: Some(template.into()),
            ..Self::default()
        }
    }

    pub fn text(template: impl Into<String>) -> Self {
        Self {
            text: Some(template.into()),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: JsonMap) -> Self {
        self.style = Some(style);
        self
    }

    fn text_template(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    fn html_template(&self) -> Option<&str> {
        self.html.as_deref().filter(|t| !t.is_empty())
    }

    fn has_template(&self) -> bool {
        self.text_template().is_some() || self.html_template().is_some()
    }
}

/// What the engine displays for one hover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub style: JsonMap,
}

impl Tooltip {
    pub fn is_enabled(&self) -> bool {
        match self {
            Tooltip::Enabled(enabled) => *enabled,
            Tooltip::Custom(_) => true,
        }
    }

    /// Fills in the default style of templates that have none.
    pub fn resolved(&self) -> Tooltip {
        match self {
            Tooltip::Custom(template) if template.has_template() && template.style.is_none() => {
                Tooltip::Custom(template.clone().with_style(DEFAULT_TOOLTIP_STYLE.clone()))
            }
            other => other.clone(),
        }
    }

    /// Tooltip for `picked`, or `None` when nothing is picked or tooltips are off.
    pub fn render(&self, picked: Option<&Value>) -> Option<TooltipContent> {
        if !self.is_enabled() {
            return None;
        }
        let picked = picked?;

        if let Tooltip::Custom(template) = self.resolved() {
            let style = template.style.clone().unwrap_or_default();
            if let Some(text) = template.text_template() {
                return Some(TooltipContent {
                    html: None,
                    text: Some(substitute(text, picked)),
                    style,
                });
            }
            if let Some(html) = template.html_template() {
                return Some(TooltipContent {
                    html: Some(substitute(html, picked)),
                    text: None,
                    style,
                });
            }
        }

        Some(TooltipContent {
            html: Some(tabularize(picked)),
            text: None,
            style: DEFAULT_TOOLTIP_STYLE.clone(),
        })
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Tooltip::Enabled(true)
    }
}

impl From<bool> for Tooltip {
    fn from(enabled: bool) -> Self {
        Tooltip::Enabled(enabled)
    }
}

impl From<TooltipTemplate> for Tooltip {
    fn from(template: TooltipTemplate) -> Self {
        Tooltip::Custom(template)
    }
}

/// Replaces the first `{key}` of every key of `picked`.
fn substitute(template: &str, picked: &Value) -> String {
    let mut output = template.to_string();
    for (key, value) in entries(picked) {
        output = output.replacen(&format!("{{{key}}}"), &js_string(value), 1);
    }
    output
}

/// Two-column table of the picked object's fields.
fn tabularize(picked: &Value) -> String {
    entries(picked)
        .filter(|(key, _)| !EXCLUDED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| {
            format!(
                r#"<div style="{ROW_STYLE}"><div class="header" style="{HEADER_STYLE}">{}</div><div class="value" style="{VALUE_STYLE}">{}</div></div>"#,
                escape_html(&key),
                escape_html(&cell_text(value)),
            )
        })
        .collect()
}

fn entries(value: &Value) -> Box<dyn Iterator<Item = (String, &Value)> + '_> {
    match value {
        Value::Object(map) => Box::new(map.iter().map(|(k, v)| (k.clone(), v))),
        Value::Array(items) => Box::new(items.iter().enumerate().map(|(i, v)| (i.to_string(), v))),
        _ => Box::new(std::iter::empty()),
    }
}

/// Table cell text, trimmed for long arrays and long values.
fn cell_text(value: &Value) -> String {
    let text = match value {
        Value::Array(items) if items.len() > TOOLTIP_ARRAY_PREVIEW_LIMIT => {
            format!("Array<{}>", items.len())
        }
        Value::String(s) => s.clone(),
        Value::Number(_) => js_string(value),
        other => other.to_string(),
    };
    text.chars().take(TOOLTIP_VALUE_MAX_LENGTH).collect()
}

/// String conversion the way the browser stringifies template values.
fn js_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(js_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_forms() {
        assert_eq!(serde_json::to_value(Tooltip::default()).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(Tooltip::from(TooltipTemplate::text("Elevation: {elevationValue}")))
                .unwrap(),
            json!({"text": "Elevation: {elevationValue}"})
        );
        let parsed: Tooltip = serde_json::from_value(json!({"html": "<b>{name}</b>"})).unwrap();
        assert_eq!(parsed, Tooltip::Custom(TooltipTemplate::html("<b>{name}</b>")));
        let parsed: Tooltip = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(parsed, Tooltip::Enabled(false));
    }

    #[test]
    fn test_nothing_picked_or_disabled() {
        let picked = json!({"name": "a"});
        assert!(Tooltip::default().render(None).is_none());
        assert!(Tooltip::Enabled(false).render(Some(&picked)).is_none());
    }

    #[test]
    fn test_text_template_wins_over_html() {
        let tooltip = Tooltip::from(TooltipTemplate {
            html: Some("<b>{name}</b>".into()),
            text: Some("Name: {name}, count {count}".into()),
            style: None,
        });
        let content = tooltip
            .render(Some(&json!({"name": "Oakland", "count": 3})))
            .unwrap();

        assert_eq!(content.text.as_deref(), Some("Name: Oakland, count 3"));
        assert!(content.html.is_none());
        assert_eq!(content.style, *DEFAULT_TOOLTIP_STYLE);
    }

    #[test]
    fn test_html_template_keeps_custom_style() {
        let mut style = JsonMap::new();
        style.insert("backgroundColor".into(), json!("red"));
        let tooltip = Tooltip::from(TooltipTemplate::html("<b>{v}</b> {v}").with_style(style.clone()));

        let content = tooltip.render(Some(&json!({"v": 1.0}))).unwrap();
        // only the first placeholder is replaced
        assert_eq!(content.html.as_deref(), Some("<b>1</b> {v}"));
        assert_eq!(content.style, style);
    }

    #[test]
    fn test_resolved_fills_default_style() {
        let resolved = Tooltip::from(TooltipTemplate::text("{a}")).resolved();
        match resolved {
            Tooltip::Custom(template) => assert_eq!(template.style, Some(DEFAULT_TOOLTIP_STYLE.clone())),
            other => panic!("unexpected tooltip {other:?}"),
        }
        assert_eq!(Tooltip::default().resolved(), Tooltip::default());
    }

    #[test]
    fn test_default_table() {
        let picked = json!({
            "name": "<Station>",
            "position": [1, 2],
            "index": 4,
            "coords": [1, 2, 3, 4, 5],
            "note": "x".repeat(60)
        });
        let html = Tooltip::default().render(Some(&picked)).unwrap().html.unwrap();

        assert!(html.contains(">name</div>"));
        assert!(html.contains("&lt;Station&gt;"));
        assert!(html.contains("Array&lt;5&gt;"));
        assert!(html.contains(&format!(">{}</div>", "x".repeat(50))));
        assert!(!html.contains(&"x".repeat(51)));
        assert!(!html.contains(">position</div>"));
        assert!(!html.contains(">index</div>"));
    }

    #[test]
    fn test_template_without_text_or_html_uses_table() {
        let tooltip = Tooltip::from(TooltipTemplate::default());
        let content = tooltip.render(Some(&json!({"k": true}))).unwrap();
        assert!(content.html.unwrap().contains(">true</div>"));
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string(&json!([1, "a", [2, 3]])), "1,a,2,3");
        assert_eq!(js_string(&json!({"a": 1})), "[object Object]");
        assert_eq!(js_string(&json!(2.5)), "2.5");
        assert_eq!(js_string(&Value::Null), "null");
    }
}
