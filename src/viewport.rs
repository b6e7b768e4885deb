//! Viewport configuration for the preview CLI
//!
//! The root rectangle handed to a layout tree usually comes from whatever
//! window or surface the caller renders into. The CLI has no window, so it
//! reads the viewport from a small TOML document instead:
//!
//! ```toml
//! [viewport]
//! width = 1024
//! height = 768
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::Rect;

/// Errors that can occur when loading a viewport file
#[derive(Error, Debug)]
pub enum ViewportError {
    #[error("Failed to read viewport file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse viewport TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root rectangle for a layout session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// TOML structure for deserializing viewports
#[derive(Deserialize)]
struct TomlViewport {
    viewport: TomlGeometry,
}

#[derive(Deserialize)]
struct TomlGeometry {
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
    #[serde(default = "default_width")]
    width: i32,
    #[serde(default = "default_height")]
    height: i32,
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

impl Viewport {
    /// Load viewport from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ViewportError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load viewport from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ViewportError> {
        let parsed: TomlViewport = toml::from_str(content)?;
        Ok(Viewport {
            x: parsed.viewport.x,
            y: parsed.viewport.y,
            width: parsed.viewport.width,
            height: parsed.viewport.height,
        })
    }

    /// The root rectangle this viewport describes
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_width(),
            height: default_height(),
        }
    }
}
