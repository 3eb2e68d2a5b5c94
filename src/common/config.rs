//! Build-time configuration for the login page endpoints with an optional
//! runtime override. The runtime config is read from `window.LOGIN_PAGE_CONFIG`
//! (if present) so the server-rendered template can point the module at its
//! own URLs without rebuilding. Configuration values are public; do not store
//! secrets here.

/// Default request timeout (milliseconds) applied to every fetch.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_CHECK_PATH: &str = "/check_user_exists_password/";
pub const DEFAULT_RESET_URL: &str = "/password_reset/";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub check_credentials_path: String,
    /// Used both as the fetch target and to locate the "forgot password" link.
    pub password_reset_url: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    pub request_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            check_credentials_path: DEFAULT_CHECK_PATH.to_string(),
            password_reset_url: DEFAULT_RESET_URL.to_string(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            csrf_header_name: DEFAULT_CSRF_HEADER.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let defaults = Self::default();
        let mut config = Self {
            api_base_url: option_env!("LOGIN_PAGE_API_BASE_URL")
                .unwrap_or("")
                .to_string(),
            check_credentials_path: option_env!("LOGIN_PAGE_CHECK_PATH")
                .map_or(defaults.check_credentials_path, str::to_string),
            password_reset_url: option_env!("LOGIN_PAGE_RESET_URL")
                .map_or(defaults.password_reset_url, str::to_string),
            log_level: option_env!("LOGIN_PAGE_LOG_LEVEL")
                .map_or(defaults.log_level, str::to_string),
            ..defaults
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    check_credentials_path: Option<String>,
    password_reset_url: Option<String>,
    csrf_cookie_name: Option<String>,
    csrf_header_name: Option<String>,
    request_timeout_ms: Option<u32>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.check_credentials_path {
        config.check_credentials_path = value;
    }
    if let Some(value) = runtime.password_reset_url {
        config.password_reset_url = value;
    }
    if let Some(value) = runtime.csrf_cookie_name {
        config.csrf_cookie_name = value;
    }
    if let Some(value) = runtime.csrf_header_name {
        config.csrf_header_name = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("LOGIN_PAGE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        check_credentials_path: read_runtime_value(&object, "check_credentials_path"),
        password_reset_url: read_runtime_value(&object, "password_reset_url"),
        csrf_cookie_name: read_runtime_value(&object, "csrf_cookie_name"),
        csrf_header_name: read_runtime_value(&object, "csrf_header_name"),
        request_timeout_ms: read_runtime_timeout(&object),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

/// Accepts either a JS number or a numeric string.
#[cfg(target_arch = "wasm32")]
fn read_runtime_timeout(object: &js_sys::Object) -> Option<u32> {
    let value =
        js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str("request_timeout_ms"))
            .ok()?;
    if let Some(number) = value.as_f64() {
        return normalize_timeout(&number.to_string());
    }
    normalize_timeout(&value.as_string()?)
}

#[cfg(any(target_arch = "wasm32", test))]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Fractional milliseconds are dropped.
#[cfg(any(target_arch = "wasm32", test))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn normalize_timeout(value: &str) -> Option<u32> {
    let parsed = normalize_runtime_value(value)?.parse::<f64>().ok()?;
    if parsed.is_finite() && parsed >= 1.0 && parsed <= f64::from(u32::MAX) {
        Some(parsed as u32)
    } else {
        None
    }
}
