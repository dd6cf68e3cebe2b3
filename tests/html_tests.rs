use std::{
    fs,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use decklet::{constants::HTML_FILE_PREFIX, prelude::*};
use serde_json::json;
use tempfile::TempDir;

/// Keeps every fragment it is asked to show
#[derive(Debug, Clone, Default)]
struct RecordingDisplay {
    shown: Arc<Mutex<Vec<String>>>,
}

impl RecordingDisplay {
    fn shown(&self) -> Vec<String> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl DisplayStrategy for RecordingDisplay {
    fn show_html(&self, html: &str) -> decklet::Result<()> {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(html.to_string());
        }
        Ok(())
    }
}

fn sample_deck(display: RecordingDisplay) -> Result<Deck> {
    let layer = Layer::new(LayerType::Hexagon, json!([{"lng": 2.35, "lat": 48.85}]))?
        .with_id("hexes")
        .with("get_position", "[lng, lat]")?;

    Ok(Deck::builder()
        .with_environment(StaticEnvironment::new())
        .with_mapbox_key("pk.html")
        .with_layers(layer)
        .with_initial_view_state(ViewState::new(2.35, 48.85, 10.0))
        .with_display(display)
        .build())
}

#[test]
fn test_explicit_filename_is_written_exactly() -> Result<()> {
    let dir = TempDir::new()?;
    let target = dir.path().join("paris.html");
    let deck = sample_deck(RecordingDisplay::default())?;

    let path = deck.to_html(&HtmlOptions::default().with_filename(&target))?;

    assert!(path.is_absolute());
    assert_eq!(path, fs::canonicalize(&target)?);

    let page = fs::read_to_string(&path)?;
    assert!(page.contains("createDeck"));
    assert!(page.contains(r#""pk.html""#));
    assert!(page.contains(r#""id":"hexes""#) || page.contains(r#""id": "hexes""#));
    Ok(())
}

#[test]
fn test_generated_filenames_are_distinct() -> Result<()> {
    let dir = TempDir::new()?;
    let deck = sample_deck(RecordingDisplay::default())?;
    let options = HtmlOptions::default().with_output_dir(dir.path());

    let first = deck.to_html(&options)?;
    let second = deck.to_html(&options)?;

    assert_ne!(first, second);
    for path in [&first, &second] {
        assert!(path.exists());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        assert!(name.starts_with(HTML_FILE_PREFIX));
        assert!(name.ends_with(".html"));
    }
    assert_eq!(fs::read_dir(dir.path())?.count(), 2);
    Ok(())
}

#[test]
fn test_notebook_display_shows_iframe() -> Result<()> {
    let dir = TempDir::new()?;
    let display = RecordingDisplay::default();
    let deck = sample_deck(display.clone())?;

    deck.to_html(
        &HtmlOptions::default()
            .with_output_dir(dir.path())
            .with_iframe_size(640, 480),
    )?;

    let shown = display.shown();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].starts_with("<iframe srcdoc="));
    assert!(shown[0].contains("width: 640px; height: 480px;"));
    Ok(())
}

#[test]
fn test_display_skipped_when_disabled() -> Result<()> {
    let dir = TempDir::new()?;
    let display = RecordingDisplay::default();
    let deck = sample_deck(display.clone())?;

    let path = deck.to_html(
        &HtmlOptions::default()
            .with_output_dir(dir.path())
            .with_notebook_display(false),
    )?;

    assert!(path.exists());
    assert!(display.shown().is_empty());
    Ok(())
}

#[test]
fn test_write_failure_is_io_error() -> Result<()> {
    let dir = TempDir::new()?;
    let deck = sample_deck(RecordingDisplay::default())?;
    let target = dir.path().join("missing").join("deck.html");

    let err = deck
        .to_html(&HtmlOptions::default().with_filename(target))
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    Ok(())
}

#[test]
fn test_widget_page_matches_state() -> Result<()> {
    let mut deck = sample_deck(RecordingDisplay::default())?;
    assert_eq!(deck.widget().render_page()?, None);

    let page = deck.show()?.render_page()?.unwrap_or_default();
    assert!(page.contains("createDeck"));
    assert!(page.contains(r#""pk.html""#));
    Ok(())
}
