use serde::{Deserialize, Serialize};
use std::fmt;

/// Default width for windows opened without a registry entry.
pub const FALLBACK_WINDOW_WIDTH: i32 = 600;
/// Default height for windows opened without a registry entry.
pub const FALLBACK_WINDOW_HEIGHT: i32 = 400;
/// Default top-left offset for windows opened without a registry entry.
pub const FALLBACK_WINDOW_X: i32 = 200;
pub const FALLBACK_WINDOW_Y: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symbolic application identifier. Launch surfaces map these to window
/// descriptors; ids outside the registry are still valid (fallback policy).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn clamped_min(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Initial field set supplied when requesting a new window. Focus is never
/// part of the descriptor; the window manager derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub min_size: Option<Size>,
}

/// One managed window. A record's presence in [`ShellState::windows`] means
/// the window is open; closing removes the record entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub min_size: Option<Size>,
    /// 1-based stacking index, recomputed after every mutation.
    pub z_index: u32,
    /// Derived: true only for the topmost non-minimized window.
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
}

impl Window {
    pub fn from_descriptor(descriptor: WindowDescriptor) -> Self {
        Self {
            id: descriptor.id,
            app_id: descriptor.app_id,
            title: descriptor.title,
            position: descriptor.position,
            size: descriptor.size,
            min_size: descriptor.min_size,
            z_index: 0,
            is_focused: false,
            minimized: false,
            maximized: false,
        }
    }
}

/// Authoritative shell state. `windows` is kept in stacking order: the last
/// element is the topmost window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShellState {
    pub windows: Vec<Window>,
    pub command_palette_open: bool,
    pub current_section: usize,
}

impl ShellState {
    pub fn window(&self, window_id: &WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn contains_window(&self, window_id: &WindowId) -> bool {
        self.window(window_id).is_some()
    }

    /// Stacking order as a list of ids, bottom first. Always a permutation of
    /// the ids in `windows`.
    pub fn window_order(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id.clone()).collect()
    }

    /// Topmost non-minimized window id, if any. This is the focused window.
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|w| !w.minimized)
            .map(|w| &w.id)
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| &w.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Ephemeral drag-gesture state. Lives outside the window records; only the
/// final committed position ever reaches the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub pointer_last: PointerPosition,
    pub position_start: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
