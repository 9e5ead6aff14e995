//! Admin back-office pages, rendered inside `AdminLayout`. Every request
//! carries the admin bearer token; a 401 ends the admin session.

mod blog;
mod dashboard;
mod products;
mod settings;

pub(crate) use blog::{BlogEditorPage, BlogListPage as AdminBlogListPage};
pub(crate) use dashboard::DashboardPage;
pub(crate) use products::{ProductEditorPage, ProductListPage};
pub(crate) use settings::SettingsPage;

use crate::app_lib::AppError;
use crate::features::auth::state::AuthContext;
use tracing::warn;

/// Message for a failed admin request. A rejected token signs the admin out,
/// which sends the guard back to the sign-in page.
fn admin_error(auth: AuthContext, err: &AppError) -> String {
    if err.status() == Some(401) {
        warn!("admin session rejected");
        auth.sign_out_admin();
    }
    err.user_message()
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Route parameter `id`, or `None` on the "new" pages.
fn editing_id(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.is_empty() && id != "new")
}
