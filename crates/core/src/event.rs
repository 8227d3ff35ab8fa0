//! Serializable page events.
//!
//! Every input the controller reacts to has a [`PageEvent`] form so traces can
//! be recorded and replayed headlessly.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::menu::ClickTarget;
use crate::result::Result;
use crate::reveal::BlockId;
use crate::section::SectionId;

/// Scroll position and page geometry at one scroll tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    #[serde(default)]
    pub scroll_height: f64,
    #[serde(default)]
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub const fn at(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            scroll_height: 0.0,
            viewport_height: 0.0,
        }
    }
}

/// Pointer position and viewport size at one pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

/// One input to the page controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Scroll(ScrollMetrics),
    Resize { width: f64 },
    PointerMove(PointerSample),
    PointerLeave,
    Key { key: String },
    Click { target: ClickTarget },
    ToggleMenu,
    Navigate { section: SectionId },
    HueInput { value: String },
    BlockVisibility { block: BlockId, ratio: f64 },
    SectionVisibility { section: SectionId, ratio: f64 },
    Frame { now_ms: f64 },
}

/// Parse a JSON array of events.
///
/// # Errors
///
/// Returns [`Error::TraceParseFailed`] if the document is not a valid trace.
pub fn parse_trace(json: &str) -> Result<Vec<PageEvent>> {
    serde_json::from_str(json).map_err(|e| Error::trace_parse_failed(e.to_string()))
}
