//! Attribute-name translation
//!
//! Attributes are written in snake_case on the Rust side and deck.gl expects
//! camelCase. Well-known names go through a fixed table; everything else is
//! converted mechanically.

use std::borrow::Cow;

/// Internal name to deck.gl name, for attributes the engine documents.
const KNOWN_NAMES: &[(&str, &str)] = &[
    ("initial_view_state", "initialViewState"),
    ("map_style", "mapStyle"),
    ("min_zoom", "minZoom"),
    ("max_zoom", "maxZoom"),
    ("min_pitch", "minPitch"),
    ("max_pitch", "maxPitch"),
    ("transition_duration", "transitionDuration"),
    ("auto_highlight", "autoHighlight"),
    ("highlight_color", "highlightColor"),
    ("get_position", "getPosition"),
    ("get_source_position", "getSourcePosition"),
    ("get_target_position", "getTargetPosition"),
    ("get_fill_color", "getFillColor"),
    ("get_line_color", "getLineColor"),
    ("get_radius", "getRadius"),
    ("get_elevation", "getElevation"),
    ("get_weight", "getWeight"),
    ("get_text", "getText"),
    ("elevation_scale", "elevationScale"),
    ("elevation_range", "elevationRange"),
    ("radius_scale", "radiusScale"),
    ("radius_min_pixels", "radiusMinPixels"),
    ("line_width_min_pixels", "lineWidthMinPixels"),
    ("color_range", "colorRange"),
    ("cell_size", "cellSize"),
];

/// Returns the name deck.gl expects for `name`.
///
/// `@@`-prefixed names are engine directives and pass through untouched.
pub fn external_name(name: &str) -> Cow<'_, str> {
    if name.starts_with("@@") || !name.contains('_') {
        return Cow::Borrowed(name);
    }

    KNOWN_NAMES
        .iter()
        .find(|(internal, _)| *internal == name)
        .map(|(_, external)| Cow::Borrowed(*external))
        .unwrap_or_else(|| Cow::Owned(to_camel_case(name)))
}

/// Drops every `_` and upper-cases the character that followed it.
pub fn to_camel_case(snake_case: &str) -> String {
    let mut output = String::with_capacity(snake_case.len());
    let mut upper_next = false;

    for c in snake_case.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            output.extend(c.to_uppercase());
        } else {
            output.push(c);
        }
        upper_next = false;
    }

    output
}
