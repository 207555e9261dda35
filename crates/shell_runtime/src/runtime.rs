//! Owned runtime container for the desktop shell.
//!
//! [`ShellRuntime`] is created once when the shell mounts and handed by
//! reference to every launch surface and window chrome. All mutation flows
//! through [`ShellRuntime::dispatch`], which applies the reducer and swallows
//! missing-window errors: the public surface is total, and an operation on an
//! unknown id is a logged no-op rather than a failure the UI would have to
//! recover from.

use crate::apps;
use crate::model::{
    AppId, InteractionState, Point, PointerPosition, ShellState, Size, Window, WindowDescriptor,
    WindowId,
};
use crate::reducer::{reduce_shell, ShellAction, ShellEffect};

#[derive(Debug, Default)]
pub struct ShellRuntime {
    state: ShellState,
    interaction: InteractionState,
    effects: Vec<ShellEffect>,
}

impl ShellRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` and queues any resulting effects for the host layer.
    pub fn dispatch(&mut self, action: ShellAction) {
        match reduce_shell(&mut self.state, &mut self.interaction, action) {
            Ok(new_effects) => {
                if !new_effects.is_empty() {
                    log::debug!("queueing {} shell effect(s)", new_effects.len());
                    self.effects.extend(new_effects);
                }
            }
            Err(err) => log::warn!("shell reducer error: {err}"),
        }
    }

    /// Opens (or re-activates) the window described by `descriptor`.
    pub fn open_window(&mut self, descriptor: WindowDescriptor) {
        self.dispatch(ShellAction::OpenWindow(descriptor));
    }

    /// Opens `app_id` through the launcher policy: deterministic window id,
    /// registry geometry, fallback descriptor for unknown apps.
    pub fn open_app(&mut self, app_id: &AppId) {
        self.open_window(apps::open_request(app_id));
    }

    pub fn close_window(&mut self, window_id: &WindowId) {
        self.dispatch(ShellAction::CloseWindow {
            window_id: window_id.clone(),
        });
    }

    pub fn focus_window(&mut self, window_id: &WindowId) {
        self.dispatch(ShellAction::FocusWindow {
            window_id: window_id.clone(),
        });
    }

    pub fn minimize_window(&mut self, window_id: &WindowId) {
        self.dispatch(ShellAction::MinimizeWindow {
            window_id: window_id.clone(),
        });
    }

    pub fn maximize_window(&mut self, window_id: &WindowId) {
        self.dispatch(ShellAction::MaximizeWindow {
            window_id: window_id.clone(),
        });
    }

    pub fn restore_window(&mut self, window_id: &WindowId) {
        self.dispatch(ShellAction::RestoreWindow {
            window_id: window_id.clone(),
        });
    }

    pub fn update_window_position(&mut self, window_id: &WindowId, position: Point) {
        self.dispatch(ShellAction::UpdateWindowPosition {
            window_id: window_id.clone(),
            position,
        });
    }

    pub fn update_window_size(&mut self, window_id: &WindowId, size: Size) {
        self.dispatch(ShellAction::UpdateWindowSize {
            window_id: window_id.clone(),
            size,
        });
    }

    pub fn begin_move(&mut self, window_id: &WindowId, pointer: PointerPosition) {
        self.dispatch(ShellAction::BeginMove {
            window_id: window_id.clone(),
            pointer,
        });
    }

    pub fn update_move(&mut self, pointer: PointerPosition) {
        self.dispatch(ShellAction::UpdateMove { pointer });
    }

    pub fn end_move(&mut self) {
        self.dispatch(ShellAction::EndMove);
    }

    pub fn toggle_command_palette(&mut self) {
        self.dispatch(ShellAction::ToggleCommandPalette);
    }

    pub fn set_current_section(&mut self, section: usize) {
        self.dispatch(ShellAction::SetCurrentSection { section });
    }

    /// Opens every app a deep link requested and applies its section jump.
    pub fn apply_deep_link(&mut self, deep_link: crate::deeplink::DeepLinkState) {
        for app_id in deep_link.open {
            self.open_app(&app_id);
        }
        if let Some(section) = deep_link.section {
            self.set_current_section(section);
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn windows(&self) -> &[Window] {
        &self.state.windows
    }

    pub fn window_order(&self) -> Vec<WindowId> {
        self.state.window_order()
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.state.active_window_id()
    }

    /// Windows the desktop should render, bottom first. Minimized windows are
    /// excluded; z-order comes from each record's `z_index`.
    pub fn render_stack(&self) -> Vec<&Window> {
        self.state.windows.iter().filter(|w| !w.minimized).collect()
    }

    /// Drains queued side-effect intents for the host layer to execute.
    pub fn drain_effects(&mut self) -> Vec<ShellEffect> {
        std::mem::take(&mut self.effects)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn operations_on_unknown_ids_are_silent_noops() {
        let mut runtime = ShellRuntime::new();
        runtime.open_app(&AppId::new("finder"));
        runtime.drain_effects();
        let before = runtime.state().clone();
        let ghost = WindowId::new("window-ghost");

        runtime.close_window(&ghost);
        runtime.focus_window(&ghost);
        runtime.minimize_window(&ghost);
        runtime.maximize_window(&ghost);
        runtime.restore_window(&ghost);
        runtime.update_window_position(&ghost, Point { x: 1, y: 2 });
        runtime.update_window_size(
            &ghost,
            Size {
                width: 10,
                height: 10,
            },
        );
        runtime.begin_move(&ghost, PointerPosition { x: 0, y: 0 });

        assert_eq!(runtime.state(), &before);
        assert!(runtime.drain_effects().is_empty());
    }

    #[test]
    fn activating_an_open_app_focuses_instead_of_duplicating() {
        let mut runtime = ShellRuntime::new();
        let finder = AppId::new("finder");
        let messages = AppId::new("messages");
        runtime.open_app(&finder);
        runtime.open_app(&messages);

        runtime.open_app(&finder);

        assert_eq!(runtime.windows().len(), 2);
        assert_eq!(
            runtime.active_window_id(),
            Some(&WindowId::new("window-finder"))
        );
        assert_eq!(
            runtime.window_order(),
            vec![
                WindowId::new("window-messages"),
                WindowId::new("window-finder"),
            ]
        );
    }

    #[test]
    fn render_stack_skips_minimized_windows() {
        let mut runtime = ShellRuntime::new();
        runtime.open_app(&AppId::new("finder"));
        runtime.open_app(&AppId::new("messages"));
        runtime.minimize_window(&WindowId::new("window-finder"));

        let rendered: Vec<_> = runtime
            .render_stack()
            .iter()
            .map(|w| w.id.clone())
            .collect();

        assert_eq!(rendered, vec![WindowId::new("window-messages")]);
        assert_eq!(runtime.windows().len(), 2);
    }

    #[test]
    fn effects_queue_drains_in_dispatch_order() {
        let mut runtime = ShellRuntime::new();
        runtime.open_app(&AppId::new("finder"));
        runtime.open_app(&AppId::new("about"));
        runtime.focus_window(&WindowId::new("window-finder"));

        let effects = runtime.drain_effects();

        assert_eq!(
            effects,
            vec![
                ShellEffect::FocusWindowInput(WindowId::new("window-finder")),
                ShellEffect::FocusWindowInput(WindowId::new("window-about")),
                ShellEffect::FocusWindowInput(WindowId::new("window-finder")),
            ]
        );
        assert!(runtime.drain_effects().is_empty());
    }

    #[test]
    fn deep_link_opens_targets_and_jumps_to_section() {
        let mut runtime = ShellRuntime::new();
        let deep_link = crate::deeplink::parse_deep_link_from_query("?open=finder,settings&section=2")
            .expect("deep link");

        runtime.apply_deep_link(deep_link);

        assert_eq!(runtime.windows().len(), 2);
        assert_eq!(
            runtime.active_window_id(),
            Some(&WindowId::new("window-settings"))
        );
        assert_eq!(runtime.state().current_section, 2);
    }

    #[test]
    fn full_drag_gesture_through_the_runtime_surface() {
        let mut runtime = ShellRuntime::new();
        let finder = AppId::new("finder");
        runtime.open_app(&finder);
        let win = WindowId::new("window-finder");
        let start = runtime.state().window(&win).unwrap().position;

        runtime.begin_move(&win, PointerPosition { x: 200, y: 200 });
        runtime.update_move(PointerPosition { x: 260, y: 180 });
        runtime.end_move();

        assert_eq!(
            runtime.state().window(&win).unwrap().position,
            start.offset(60, -20)
        );
    }
}
