//! Layout components shared across routes.

mod admin_layout;
mod app_shell;
mod floating_menu;

pub(crate) use admin_layout::AdminLayout;
pub(crate) use app_shell::AppShell;
pub(crate) use floating_menu::FloatingMenu;
