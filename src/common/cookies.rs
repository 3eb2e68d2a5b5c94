//! Reading values out of a `document.cookie` string.

use std::borrow::Cow;

/// Returns the percent-decoded value of the cookie called `name`, or `None`
/// when the cookie string is empty or holds no such cookie.
///
/// Keys are decoded before comparison and matched exactly, so `CSRFtoken`
/// does not match `csrftoken`. The first matching entry wins.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|entry| entry.split_once('='))
        .find(|(key, _)| decode(key) == name)
        .map(|(_, value)| decode(value).into_owned())
}

/// Percent-decodes a cookie component, keeping the raw text when the decoded
/// bytes are not valid UTF-8.
fn decode(component: &str) -> Cow<'_, str> {
    urlencoding::decode(component).unwrap_or(Cow::Borrowed(component))
}
