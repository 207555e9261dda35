//! Reducer actions, side-effect intents, and transition logic for the shell.

use thiserror::Error;

use crate::model::{
    DragSession, InteractionState, Point, PointerPosition, ShellState, Size, WindowDescriptor,
    WindowId,
};
use crate::window_manager;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Open a new window, or activate the existing window with the same id.
    OpenWindow(WindowDescriptor),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window (geometry override only).
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Restore a maximized window to its floating geometry.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Replace a window's committed position.
    UpdateWindowPosition {
        /// Window to move.
        window_id: WindowId,
        /// New absolute position.
        position: Point,
    },
    /// Replace a window's size.
    UpdateWindowSize {
        /// Window to resize.
        window_id: WindowId,
        /// New size.
        size: Size,
    },
    /// Begin dragging a window's chrome.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag with the latest pointer position.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag, committing the accumulated delta as one absolute
    /// position update.
    EndMove,
    /// Toggle the command palette open/closed.
    ToggleCommandPalette,
    /// Record the scroll-driven section the shell is showing.
    SetCurrentSection {
        /// Zero-based section index.
        section: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_shell`] for the host shell to execute.
pub enum ShellEffect {
    /// Move input focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing a missing window.
pub enum ShellError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`ShellAction`] to the shell state and collects resulting side
/// effects.
///
/// This function is the authoritative state transition engine for window
/// lifecycle, stacking, and focus. Drag-gesture state stays in the separate
/// [`InteractionState`]; window records only ever see committed positions.
///
/// # Errors
///
/// Returns [`ShellError::WindowNotFound`] when an action references a window
/// that is not present. [`crate::runtime::ShellRuntime`] downgrades this to a
/// logged no-op so launch surfaces and window chrome never observe a failure.
pub fn reduce_shell(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    action: ShellAction,
) -> Result<Vec<ShellEffect>, ShellError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::OpenWindow(descriptor) => {
            let window_id = descriptor.id.clone();
            window_manager::open_window(state, descriptor);
            state.command_palette_open = false;
            effects.push(ShellEffect::FocusWindowInput(window_id));
        }
        ShellAction::CloseWindow { window_id } => {
            if !window_manager::close_window(state, &window_id) {
                return Err(ShellError::WindowNotFound);
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
        }
        ShellAction::FocusWindow { window_id } => {
            if !window_manager::focus_window(state, &window_id) {
                return Err(ShellError::WindowNotFound);
            }
            effects.push(ShellEffect::FocusWindowInput(window_id));
        }
        ShellAction::MinimizeWindow { window_id } => {
            if !window_manager::minimize_window(state, &window_id) {
                return Err(ShellError::WindowNotFound);
            }
        }
        ShellAction::MaximizeWindow { window_id } => {
            if !window_manager::maximize_window(state, &window_id) {
                return Err(ShellError::WindowNotFound);
            }
        }
        ShellAction::RestoreWindow { window_id } => {
            if !window_manager::restore_window(state, &window_id) {
                return Err(ShellError::WindowNotFound);
            }
        }
        ShellAction::UpdateWindowPosition {
            window_id,
            position,
        } => {
            if !window_manager::update_window_position(state, &window_id, position) {
                return Err(ShellError::WindowNotFound);
            }
        }
        ShellAction::UpdateWindowSize { window_id, size } => {
            if !window_manager::update_window_size(state, &window_id, size) {
                return Err(ShellError::WindowNotFound);
            }
        }
        ShellAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.window(&window_id) else {
                return Err(ShellError::WindowNotFound);
            };
            let maximized = window.maximized;
            let position_start = window.position;
            window_manager::focus_window(state, &window_id);
            effects.push(ShellEffect::FocusWindowInput(window_id.clone()));
            // Maximized windows are not draggable; the gesture only raises them.
            if !maximized {
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    pointer_last: pointer,
                    position_start,
                });
            }
        }
        ShellAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                session.pointer_last = pointer;
            }
        }
        ShellAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                let dx = session.pointer_last.x - session.pointer_start.x;
                let dy = session.pointer_last.y - session.pointer_start.y;
                let committed = session.position_start.offset(dx, dy);
                window_manager::update_window_position(state, &session.window_id, committed);
            }
        }
        ShellAction::ToggleCommandPalette => {
            state.command_palette_open = !state.command_palette_open;
        }
        ShellAction::SetCurrentSection { section } => {
            state.current_section = section;
        }
    }

    window_manager::normalize_window_stack(state);
    Ok(effects)
}
