//! HTTP helpers for the JSON REST backend with consistent timeouts and error
//! handling. Feature clients use these helpers instead of building requests
//! themselves. The helpers never store tokens; bearer tokens are passed in by
//! callers, who read them from the session store.
//!
//! URL building and error-body parsing are target independent. The transport
//! itself uses `gloo-net` and only exists in the browser build.

use super::errors::{ApiFailure, ErrorCode};
use serde::Deserialize;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Error body shape used by the backend. Both `message` and `error` are seen
/// in the wild, as are both spellings of the remaining attempts counter.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    code: Option<ErrorCode>,
    #[serde(alias = "remainingAttempts")]
    attempts_remaining: Option<u32>,
}

/// Converts a failed response into an `ApiFailure`, keeping structured fields
/// when the body is JSON and falling back to the sanitized text otherwise.
pub fn parse_error_body(status: u16, body: &str) -> ApiFailure {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return ApiFailure::new(status, sanitize_body(body));
    };

    let message = parsed
        .message
        .or(parsed.error)
        .map_or_else(|| default_message(status), |message| sanitize_body(&message));

    ApiFailure {
        status,
        message,
        code: parsed.code,
        attempts_remaining: parsed.attempts_remaining,
    }
}

fn default_message(status: u16) -> String {
    match status {
        401 => "Not authorized.".to_string(),
        403 => "Access denied.".to_string(),
        404 => "Not found.".to_string(),
        423 => "Account temporarily locked.".to_string(),
        _ => "Request failed.".to_string(),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Formats an `Authorization` header pair for admin and user routes.
pub fn bearer_header(token: &str) -> (String, String) {
    ("Authorization".to_string(), format!("Bearer {}", token.trim()))
}

#[cfg(target_arch = "wasm32")]
pub use transport::{
    delete_with_headers, get_json, get_json_with_headers, post_json, post_json_response,
    put_json_response,
};

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::{DEFAULT_TIMEOUT_MS, build_url_with_base, parse_error_body};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use gloo_net::http::{Request, RequestBuilder, Response};
    use gloo_timers::callback::Timeout;
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::to_string;
    use tracing::debug;
    use web_sys::AbortController;

    /// Fetches JSON from a public endpoint.
    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        get_json_with_headers(path, &[]).await
    }

    /// Fetches JSON with custom headers, typically a bearer token.
    pub async fn get_json_with_headers<T: DeserializeOwned>(
        path: &str,
        headers: &[(String, String)],
    ) -> Result<T, AppError> {
        let url = build_url(path);
        debug!(path, "GET");
        let response = send_with_timeout(|signal| {
            with_headers(Request::get(&url).abort_signal(Some(signal)), headers)
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    /// Posts JSON and ignores the success body.
    pub async fn post_json<B: Serialize>(
        path: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<(), AppError> {
        let response = send_json(Request::post, path, body, headers).await?;
        handle_empty_response(response).await
    }

    /// Posts JSON and parses a JSON response.
    pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<T, AppError> {
        let response = send_json(Request::post, path, body, headers).await?;
        handle_json_response(response).await
    }

    /// Puts JSON and parses a JSON response.
    pub async fn put_json_response<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<T, AppError> {
        let response = send_json(Request::put, path, body, headers).await?;
        handle_json_response(response).await
    }

    /// Sends a DELETE and expects no meaningful response body.
    pub async fn delete_with_headers(
        path: &str,
        headers: &[(String, String)],
    ) -> Result<(), AppError> {
        let url = build_url(path);
        debug!(path, "DELETE");
        let response = send_with_timeout(|signal| {
            with_headers(Request::delete(&url).abort_signal(Some(signal)), headers)
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_empty_response(response).await
    }

    async fn send_json<B: Serialize>(
        method: fn(&str) -> RequestBuilder,
        path: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<Response, AppError> {
        let url = build_url(path);
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        debug!(path, "sending JSON request");

        send_with_timeout(move |signal| {
            let builder = method(&url)
                .header("Content-Type", "application/json")
                .abort_signal(Some(signal));

            with_headers(builder, headers)
                .body(payload)
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await
    }

    fn with_headers(mut builder: RequestBuilder, headers: &[(String, String)]) -> RequestBuilder {
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    /// Builds a URL from the configured API base URL and the provided path.
    fn build_url(path: &str) -> String {
        let config = AppConfig::load();
        build_url_with_base(&config.api_base_url, path)
    }

    /// Maps network errors into user-facing `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request with an abort timeout to avoid hanging UI state.
    async fn send_with_timeout(
        build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    /// Parses JSON responses and surfaces HTTP errors with structured bodies.
    async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
        } else {
            Err(failure_from(response).await)
        }
    }

    /// Handles responses whose body the caller does not need.
    async fn handle_empty_response(response: Response) -> Result<(), AppError> {
        if response.ok() {
            Ok(())
        } else {
            Err(failure_from(response).await)
        }
    }

    async fn failure_from(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(status, "request failed");
        AppError::Http(parse_error_body(status, &body))
    }
}
