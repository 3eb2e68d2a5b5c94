//! Password-reset endpoint client. The CSRF token is passed in by the caller
//! and sent as a header; it must never be logged.

use super::types::{PasswordResetRequest, PasswordResetResponse};
use crate::common::AppError;

#[allow(async_fn_in_trait)]
pub trait PasswordResetApi {
    /// Posts the reset request. `csrf_token` is `None` when the page carries
    /// no CSRF cookie, in which case the header is left out.
    async fn request_password_reset(
        &self,
        request: &PasswordResetRequest,
        csrf_token: Option<&str>,
    ) -> Result<PasswordResetResponse, AppError>;
}

/// Extra headers for the reset POST.
pub fn csrf_headers(header_name: &str, csrf_token: Option<&str>) -> Vec<(String, String)> {
    csrf_token
        .map(|token| vec![(header_name.to_string(), token.to_string())])
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
impl PasswordResetApi for crate::common::api::HttpClient {
    async fn request_password_reset(
        &self,
        request: &PasswordResetRequest,
        csrf_token: Option<&str>,
    ) -> Result<PasswordResetResponse, AppError> {
        let config = self.config();
        let url = self.url(&config.password_reset_url);
        let headers = csrf_headers(&config.csrf_header_name, csrf_token);
        crate::common::api::post_json_any_status(&url, request, &headers, config.request_timeout_ms)
            .await
    }
}
