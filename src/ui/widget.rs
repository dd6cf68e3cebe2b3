use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    io::html::{self, HtmlEmitter},
    ui::{
        display::{DisplayStrategy, EvcxrDisplay},
        tooltip::Tooltip,
    },
    Result,
};

/// Widget size: pixels, or any CSS length such as `"100%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Css(String),
}

impl Dimension {
    /// Value suitable for a CSS property
    pub fn to_css(&self) -> String {
        match self {
            Dimension::Pixels(px) => format!("{px}px"),
            Dimension::Css(length) => length.clone(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(length: &str) -> Self {
        Dimension::Css(length.to_string())
    }
}

impl From<String> for Dimension {
    fn from(length: String) -> Self {
        Dimension::Css(length)
    }
}

/// Handle the notebook host uses to report what the user picked.
///
/// Cheap to clone and usable from the host's own event-loop thread. At most
/// one unread report is buffered; a new one evicts it.
#[derive(Debug, Clone)]
pub struct SelectionSender {
    tx: Sender<Value>,
    stale: Receiver<Value>,
}

impl SelectionSender {
    /// Reports a selection, replacing any report not yet read.
    pub fn send(&self, selection: Value) {
        let mut selection = selection;
        loop {
            match self.tx.try_send(selection) {
                Ok(()) => return,
                Err(TrySendError::Full(pending)) => {
                    let _ = self.stale.try_recv();
                    selection = pending;
                }
                // unreachable while `stale` is held
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    }
}

/// Notebook-side endpoint of a deck
///
/// Holds what was last pushed for rendering and the last selection the
/// engine reported. Selections are opaque; they are never inspected here.
#[derive(Debug, Clone)]
pub struct DeckWidget {
    json_input: Option<String>,
    mapbox_key: Option<String>,
    width: Dimension,
    height: Dimension,
    tooltip: Tooltip,
    selection_tx: Sender<Value>,
    selection_rx: Receiver<Value>,
    selected: Arc<Mutex<Option<Value>>>,
}

impl DeckWidget {
    pub fn new() -> Self {
        let (selection_tx, selection_rx) = crossbeam_channel::bounded(1);
        Self {
            json_input: None,
            mapbox_key: None,
            width: Dimension::from(DEFAULT_WIDTH),
            height: Dimension::from(DEFAULT_HEIGHT),
            tooltip: Tooltip::default(),
            selection_tx,
            selection_rx,
            selected: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the rendered configuration
    pub fn set_json_input(&mut self, json_input: String) {
        log::debug!("widget received {} bytes of deck JSON", json_input.len());
        self.json_input = Some(json_input);
    }

    pub fn json_input(&self) -> Option<&str> {
        self.json_input.as_deref()
    }

    pub fn set_mapbox_key(&mut self, mapbox_key: Option<String>) {
        self.mapbox_key = mapbox_key;
    }

    pub fn mapbox_key(&self) -> Option<&str> {
        self.mapbox_key.as_deref()
    }

    pub fn set_size(&mut self, width: Dimension, height: Dimension) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> &Dimension {
        &self.width
    }

    pub fn height(&self) -> &Dimension {
        &self.height
    }

    pub fn set_tooltip(&mut self, tooltip: Tooltip) {
        self.tooltip = tooltip;
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn selection_sender(&self) -> SelectionSender {
        SelectionSender {
            tx: self.selection_tx.clone(),
            stale: self.selection_rx.clone(),
        }
    }

    /// Last selection reported by the engine; later reports overwrite earlier ones.
    pub fn selected_data(&self) -> Option<Value> {
        let mut selected = self.selected.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(latest) = self.selection_rx.try_iter().last() {
            *selected = Some(latest);
        }
        selected.clone()
    }

    /// Standalone page for the current configuration, `None` before anything
    /// was pushed.
    pub fn render_page(&self) -> Result<Option<String>> {
        self.json_input
            .as_deref()
            .map(|json| HtmlEmitter::render(json, self.mapbox_key.as_deref(), &self.tooltip))
            .transpose()
    }

    /// Hook picked up by the evcxr Jupyter kernel when the widget is the
    /// value of a cell.
    pub fn evcxr_display(&self) {
        match self.render_page() {
            Ok(Some(page)) => {
                let frame = html::iframe(&page, &self.width, &self.height);
                if let Err(e) = EvcxrDisplay.show_html(&frame) {
                    log::warn!("Failed to display deck: {}", e);
                }
            }
            Ok(None) => log::debug!("nothing to display, call update() first"),
            Err(e) => log::warn!("Failed to render deck: {}", e),
        }
    }
}

impl Default for DeckWidget {
    fn default() -> Self {
        Self::new()
    }
}
