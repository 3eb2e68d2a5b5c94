//! HTTP helpers for the two JSON endpoints the page talks to. Every request is
//! bounded by an abort timeout so a hung server cannot leave a form stuck.
//! The helpers do not store secrets; callers pass the CSRF header explicitly
//! and must not log request URLs that carry credentials.

use super::{config::AppConfig, errors::AppError};
use serde::de::DeserializeOwned;
use std::rc::Rc;

/// Maximum number of error body characters surfaced to the page.
const MAX_ERROR_CHARS: usize = 200;

/// Fetch-backed client shared by both forms. Feature modules implement their
/// API traits on it.
#[derive(Clone, Debug)]
pub struct HttpClient {
    config: Rc<AppConfig>,
}

impl HttpClient {
    pub fn new(config: Rc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolves `path` against the configured API base URL.
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.config.api_base_url, path)
    }
}

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

/// Appends percent-encoded query parameters to `path`.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path.to_string()
    } else if path.contains('?') {
        format!("{path}&{query}")
    } else {
        format!("{path}?{query}")
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Turns a response status and body into a decoded value or an error.
///
/// With `any_status` the body is decoded whatever the status, since form
/// endpoints report failures in JSON; otherwise a non-2xx status is an error
/// before the body is looked at. A body that does not decode is `Http` on a
/// failed status and `Parse` on a successful one.
///
/// # Errors
///
/// Returns `AppError::Http` or `AppError::Parse` as described above.
pub fn decode_body<T: DeserializeOwned>(
    status: u16,
    ok: bool,
    body: &str,
    any_status: bool,
) -> Result<T, AppError> {
    if !ok && !any_status {
        return Err(AppError::Http {
            status,
            message: sanitize_body(body),
        });
    }

    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(AppError::Http {
            status,
            message: sanitize_body(body),
        }),
        Err(err) => Err(AppError::Parse(format!("Failed to decode response: {err}"))),
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::{get_json, post_json_any_status};

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::decode_body;
    use crate::common::errors::AppError;
    use gloo_net::http::{Request, Response};
    use gloo_timers::callback::Timeout;
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::to_string;
    use web_sys::{AbortController, AbortSignal, RequestCredentials};

    /// Fetches JSON with the page's cookies; non-2xx statuses are errors.
    pub async fn get_json<T: DeserializeOwned>(url: &str, timeout_ms: u32) -> Result<T, AppError> {
        let response = send_with_timeout(timeout_ms, |signal| {
            Request::get(url)
                .credentials(RequestCredentials::SameOrigin)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        read_body(response, false).await
    }

    /// Posts JSON with custom headers and decodes the JSON reply whatever the
    /// status, since form endpoints report failures in the body.
    pub async fn post_json_any_status<B: Serialize, T: DeserializeOwned>(
        url: &str,
        body: &B,
        headers: &[(String, String)],
        timeout_ms: u32,
    ) -> Result<T, AppError> {
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = send_with_timeout(timeout_ms, move |signal| {
            let mut builder = Request::post(url)
                .header("Content-Type", "application/json")
                .credentials(RequestCredentials::SameOrigin)
                .abort_signal(Some(signal));

            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            builder
                .body(payload)
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        read_body(response, true).await
    }

    /// Maps network errors into `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request with an abort timeout to avoid hanging form state.
    async fn send_with_timeout(
        timeout_ms: u32,
        build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    async fn read_body<T: DeserializeOwned>(
        response: Response,
        any_status: bool,
    ) -> Result<T, AppError> {
        let status = response.status();
        let ok = response.ok();
        let body = match response.text().await {
            Ok(body) => body,
            Err(_) if !ok => String::new(),
            Err(err) => return Err(AppError::Parse(format!("Failed to read response: {err}"))),
        };
        decode_body(status, ok, &body, any_status)
    }
}
