//! Build-time configuration for the API endpoint and site metadata with an
//! optional runtime override. The runtime config is read from
//! `window.FOLIO_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not
//! store secrets here.

use crate::features::auth::oauth::OAuthProvider;

/// Verbosity used when nothing is configured (WARN).
const DEFAULT_LOG_LEVEL: u8 = 1;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub site_name: String,
    pub contact_email: String,
    /// Verbosity 0-4 (ERROR, WARN, INFO, DEBUG, TRACE).
    pub log_level: u8,
    pub oauth_providers: Vec<OAuthProvider>,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env() -> Self {
        let api_base_url = option_env!("FOLIO_API_BASE_URL").unwrap_or("");
        let site_name = option_env!("FOLIO_SITE_NAME").unwrap_or("Folio");
        let contact_email = option_env!("FOLIO_CONTACT_EMAIL").unwrap_or("hello@folio.studio");

        Self {
            api_base_url: api_base_url.to_string(),
            site_name: site_name.to_string(),
            contact_email: contact_email.to_string(),
            log_level: option_env!("FOLIO_LOG_LEVEL")
                .and_then(parse_log_level)
                .unwrap_or(DEFAULT_LOG_LEVEL),
            oauth_providers: option_env!("FOLIO_OAUTH_PROVIDERS")
                .map_or_else(|| OAuthProvider::ALL.to_vec(), parse_providers),
        }
    }

    pub fn oauth_enabled(&self, provider: OAuthProvider) -> bool {
        self.oauth_providers.contains(&provider)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    site_name: Option<String>,
    contact_email: Option<String>,
    log_level: Option<String>,
    oauth_providers: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.site_name {
        config.site_name = value;
    }
    if let Some(value) = runtime.contact_email {
        config.contact_email = value;
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_log_level) {
        config.log_level = level;
    }
    if let Some(value) = runtime.oauth_providers {
        config.oauth_providers = parse_providers(&value);
    }
}

/// Accepts a number 0-4 or a level name, mirroring the `-v` handling of the
/// service CLIs.
fn parse_log_level(level: &str) -> Option<u8> {
    let level = level.trim();
    if let Ok(parsed) = level.parse::<u8>() {
        return (parsed <= 4).then_some(parsed);
    }

    match level.to_lowercase().as_str() {
        "error" => Some(0),
        "warn" => Some(1),
        "info" => Some(2),
        "debug" => Some(3),
        "trace" => Some(4),
        _ => None,
    }
}

/// Comma separated provider list; unknown names are ignored.
fn parse_providers(value: &str) -> Vec<OAuthProvider> {
    let mut providers = Vec::new();
    for provider in value.split(',').filter_map(OAuthProvider::from_name) {
        if !providers.contains(&provider) {
            providers.push(provider);
        }
    }
    providers
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("FOLIO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        site_name: read_runtime_value(&object, "site_name"),
        contact_email: read_runtime_value(&object, "contact_email"),
        log_level: read_runtime_value(&object, "log_level"),
        oauth_providers: read_runtime_value(&object, "oauth_providers"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
