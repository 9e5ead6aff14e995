//! Client wrappers for `/api/settings`.

#[cfg(target_arch = "wasm32")]
use crate::app_lib::{AppError, get_json, put_json_response};
#[cfg(target_arch = "wasm32")]
use crate::features::settings::types::SiteSettings;

pub const SETTINGS_PATH: &str = "/api/settings";

#[cfg(target_arch = "wasm32")]
pub async fn get_settings() -> Result<SiteSettings, AppError> {
    get_json(SETTINGS_PATH).await
}

#[cfg(target_arch = "wasm32")]
pub async fn update_settings(
    settings: &SiteSettings,
    headers: &[(String, String)],
) -> Result<SiteSettings, AppError> {
    put_json_response(SETTINGS_PATH, settings, headers).await
}
