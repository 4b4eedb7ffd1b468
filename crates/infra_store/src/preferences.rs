//! User preferences carried alongside the book
//!
//! The snapshot document holds a small preferences block next to the book
//! data: window geometry for front ends to restore, and the data file the
//! user worked with last. Every field is optional on disk so snapshots from
//! older versions still load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Window placement remembered between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Horizontal position, unset when the window manager should decide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// Vertical position, unset when the window manager should decide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl WindowGeometry {
    /// Creates a geometry with the given size and no fixed position
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x: None,
            y: None,
        }
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// Per-user settings stored in the snapshot document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Last known window placement
    #[serde(default)]
    pub window: WindowGeometry,
    /// The data file opened most recently
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_data_path: Option<PathBuf>,
}
