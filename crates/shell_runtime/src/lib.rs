pub mod apps;
pub mod deeplink;
pub mod model;
pub mod reducer;
pub mod runtime;
pub mod window_manager;

pub use apps::{app_registry, dock_apps, open_request, palette_commands, window_id_for};
pub use deeplink::{parse_deep_link_from_query, DeepLinkState};
pub use model::*;
pub use reducer::{reduce_shell, ShellAction, ShellEffect, ShellError};
pub use runtime::ShellRuntime;
