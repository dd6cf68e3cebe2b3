//! Notebook-facing pieces: the widget channel, display strategies, tooltips

pub mod display;
pub mod tooltip;
pub mod widget;

pub use display::{DisplayStrategy, EvcxrDisplay, Headless};

pub use tooltip::{Tooltip, TooltipContent, TooltipTemplate, DEFAULT_TOOLTIP_STYLE};

pub use widget::{DeckWidget, Dimension, SelectionSender};
