//! Shared window-manager transition helpers used by the shell reducer.
//!
//! Every mutation here leaves [`ShellState`] satisfying the stacking/focus
//! invariants: the windows vector is the stacking order (last = topmost),
//! at most one window is focused, and the focused window is always the
//! topmost non-minimized one.

use crate::model::{Point, ShellState, Size, Window, WindowDescriptor, WindowId};

/// Opens a window from `descriptor`, or activates the existing window with
/// the same id.
///
/// Re-opening never reapplies descriptor fields: an existing window keeps its
/// title, position, and size, is un-minimized if needed, and is raised.
pub fn open_window(state: &mut ShellState, descriptor: WindowDescriptor) -> bool {
    if let Some(index) = state.windows.iter().position(|w| w.id == descriptor.id) {
        state.windows[index].minimized = false;
        focus_window_internal(state, &descriptor.id);
        return true;
    }

    state.windows.push(Window::from_descriptor(descriptor));
    normalize_window_stack(state);
    true
}

/// Removes `window_id` from the managed set and stacking order.
///
/// Returns `false` when the id is unknown. Focus falls back to the new
/// topmost non-minimized window, if one remains.
pub fn close_window(state: &mut ShellState, window_id: &WindowId) -> bool {
    let before_len = state.windows.len();
    state.windows.retain(|w| &w.id != window_id);
    if state.windows.len() == before_len {
        return false;
    }
    normalize_window_stack(state);
    true
}

/// Raises `window_id` to the top of the stacking order.
///
/// Minimized/maximized bits and geometry are untouched; a minimized window
/// raised this way still does not receive focus.
pub fn focus_window(state: &mut ShellState, window_id: &WindowId) -> bool {
    if !state.contains_window(window_id) {
        return false;
    }
    focus_window_internal(state, window_id);
    true
}

/// Minimizes `window_id`, dropping it from focus consideration while keeping
/// its slot in the stacking order and its geometry.
pub fn minimize_window(state: &mut ShellState, window_id: &WindowId) -> bool {
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.minimized = true;
    normalize_window_stack(state);
    true
}

/// Sets the fullscreen-geometry override bit. Order and focus are untouched.
pub fn maximize_window(state: &mut ShellState, window_id: &WindowId) -> bool {
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.maximized = true;
    true
}

/// Clears the fullscreen-geometry override bit. Order and focus are untouched.
pub fn restore_window(state: &mut ShellState, window_id: &WindowId) -> bool {
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.maximized = false;
    true
}

/// Replaces the window's committed position. Order and focus are untouched.
pub fn update_window_position(state: &mut ShellState, window_id: &WindowId, position: Point) -> bool {
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.position = position;
    true
}

/// Replaces the window's size, clamped to its minimum size when one is set.
/// Order and focus are untouched.
pub fn update_window_size(state: &mut ShellState, window_id: &WindowId, size: Size) -> bool {
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.size = match window.min_size {
        Some(min) => size.clamped_min(min),
        None => size,
    };
    true
}

/// Normalizes z-index ordering and the derived focus flag for all windows.
///
/// Focus is never stored independently: exactly the last non-minimized window
/// in stacking order is focused, or none when every window is minimized.
pub fn normalize_window_stack(state: &mut ShellState) {
    let focused_index = state
        .windows
        .iter()
        .rposition(|w| !w.minimized);
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        window.is_focused = focused_index == Some(idx);
    }
}

fn find_window_mut<'a>(
    state: &'a mut ShellState,
    window_id: &WindowId,
) -> Option<&'a mut Window> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

fn focus_window_internal(state: &mut ShellState, window_id: &WindowId) {
    let Some(index) = state.windows.iter().position(|w| &w.id == window_id) else {
        return;
    };
    if index + 1 != state.windows.len() {
        let window = state.windows.remove(index);
        state.windows.push(window);
    }
    normalize_window_stack(state);
}
