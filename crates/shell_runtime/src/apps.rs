//! Launch-surface policy: the static per-app registry shared by the dock and
//! the command palette, and the descriptor-building rules both go through.

use serde::{Deserialize, Serialize};

use crate::model::{
    AppId, Point, Size, WindowDescriptor, WindowId, FALLBACK_WINDOW_HEIGHT, FALLBACK_WINDOW_WIDTH,
    FALLBACK_WINDOW_X, FALLBACK_WINDOW_Y,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteCategory {
    Apps,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: &'static str,
    pub launcher_label: &'static str,
    pub window_title: &'static str,
    pub position: Point,
    pub size: Size,
    pub category: PaletteCategory,
    pub show_in_dock: bool,
}

const APP_REGISTRY: [AppDescriptor; 6] = [
    AppDescriptor {
        app_id: "finder",
        launcher_label: "Finder",
        window_title: "Finder",
        position: Point { x: 100, y: 80 },
        size: Size {
            width: 680,
            height: 460,
        },
        category: PaletteCategory::Apps,
        show_in_dock: true,
    },
    AppDescriptor {
        app_id: "about",
        launcher_label: "About",
        window_title: "About — Glass OS",
        position: Point { x: 200, y: 100 },
        size: Size {
            width: 600,
            height: 420,
        },
        category: PaletteCategory::Apps,
        show_in_dock: true,
    },
    AppDescriptor {
        app_id: "workspace",
        launcher_label: "Workspace",
        window_title: "Workspace",
        position: Point { x: 150, y: 60 },
        size: Size {
            width: 750,
            height: 500,
        },
        category: PaletteCategory::Apps,
        show_in_dock: true,
    },
    AppDescriptor {
        app_id: "design",
        launcher_label: "Design System",
        window_title: "Design System",
        position: Point { x: 250, y: 90 },
        size: Size {
            width: 640,
            height: 480,
        },
        category: PaletteCategory::Apps,
        show_in_dock: true,
    },
    AppDescriptor {
        app_id: "messages",
        launcher_label: "Messages",
        window_title: "Messages",
        position: Point { x: 300, y: 120 },
        size: Size {
            width: 500,
            height: 400,
        },
        category: PaletteCategory::Apps,
        show_in_dock: true,
    },
    AppDescriptor {
        app_id: "settings",
        launcher_label: "Settings",
        window_title: "Settings",
        position: Point { x: 350, y: 140 },
        size: Size {
            width: 480,
            height: 380,
        },
        category: PaletteCategory::System,
        show_in_dock: true,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.app_id == app_id.as_str())
}

/// Dock entries, in dock order.
pub fn dock_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_dock)
        .collect()
}

/// Derives the window id a launch surface targets for `app_id`.
///
/// Deterministic so repeated activation of the same app reaches the existing
/// window instead of spawning a duplicate.
pub fn window_id_for(app_id: &AppId) -> WindowId {
    WindowId::new(format!("window-{app_id}"))
}

/// Builds the open-window descriptor for `app_id`.
///
/// Unknown app ids still produce a valid descriptor: the raw id as title and
/// the fallback geometry.
pub fn open_request(app_id: &AppId) -> WindowDescriptor {
    let (title, position, size) = match app_descriptor(app_id) {
        Some(entry) => (entry.window_title.to_string(), entry.position, entry.size),
        None => (
            app_id.to_string(),
            Point {
                x: FALLBACK_WINDOW_X,
                y: FALLBACK_WINDOW_Y,
            },
            Size {
                width: FALLBACK_WINDOW_WIDTH,
                height: FALLBACK_WINDOW_HEIGHT,
            },
        ),
    };
    WindowDescriptor {
        id: window_id_for(app_id),
        app_id: app_id.clone(),
        title,
        position,
        size,
        min_size: None,
    }
}

/// One command palette row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCommand {
    pub command_id: String,
    pub label: String,
    pub category: PaletteCategory,
    pub app_id: AppId,
}

/// "Open <app>" palette entries for every registered app, in registry order.
pub fn palette_commands() -> Vec<PaletteCommand> {
    app_registry()
        .iter()
        .map(|entry| PaletteCommand {
            command_id: format!("open-{}", entry.app_id),
            label: format!("Open {}", entry.launcher_label),
            category: entry.category,
            app_id: AppId::new(entry.app_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registered_app_uses_registry_geometry() {
        let request = open_request(&AppId::new("finder"));

        assert_eq!(request.id, WindowId::new("window-finder"));
        assert_eq!(request.title, "Finder");
        assert_eq!(request.position, Point { x: 100, y: 80 });
        assert_eq!(
            request.size,
            Size {
                width: 680,
                height: 460
            }
        );
    }

    #[test]
    fn unknown_app_gets_fallback_descriptor_instead_of_failing() {
        let request = open_request(&AppId::new("sketchpad"));

        assert_eq!(request.id, WindowId::new("window-sketchpad"));
        assert_eq!(request.title, "sketchpad");
        assert_eq!(request.position, Point { x: 200, y: 100 });
        assert_eq!(
            request.size,
            Size {
                width: 600,
                height: 400
            }
        );
    }

    #[test]
    fn window_id_derivation_is_deterministic_per_app() {
        let app = AppId::new("messages");
        assert_eq!(window_id_for(&app), window_id_for(&app));
        assert_eq!(window_id_for(&app), WindowId::new("window-messages"));
    }

    #[test]
    fn palette_lists_open_command_per_registered_app() {
        let commands = palette_commands();

        assert_eq!(commands.len(), app_registry().len());
        let settings = commands
            .iter()
            .find(|cmd| cmd.app_id.as_str() == "settings")
            .expect("settings command");
        assert_eq!(settings.command_id, "open-settings");
        assert_eq!(settings.label, "Open Settings");
        assert_eq!(settings.category, PaletteCategory::System);
    }

    #[test]
    fn dock_lists_every_registered_app_in_order() {
        let labels: Vec<_> = dock_apps()
            .iter()
            .map(|entry| entry.launcher_label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Finder",
                "About",
                "Workspace",
                "Design System",
                "Messages",
                "Settings"
            ]
        );
    }
}
