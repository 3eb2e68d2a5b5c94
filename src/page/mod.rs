//! Page element bundle. Both controllers work against these small traits
//! instead of a global `document`, so the same code drives the real page
//! (see `dom`) and in-memory pages in tests.
//!
//! All lookups happen once, in [`PageElements::resolve`]. A page missing any
//! required element gets no wiring at all; the error names every absent id.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::common::SetupError;

/// A form that can be submitted natively and carries the `data-submitted` flag.
pub trait FormHandle {
    fn is_submitted(&self) -> bool;
    fn mark_submitted(&self);
    /// Submits without firing the `submit` event again.
    fn submit(&self);
}

pub trait InputHandle {
    fn value(&self) -> String;
}

/// A block of text whose content and visibility the page toggles: error
/// messages, the reset container, the reset status line.
pub trait SlotHandle {
    fn set_text(&self, text: &str);
    fn set_visible(&self, visible: bool);

    fn clear(&self) {
        self.set_text("");
        self.set_visible(false);
    }

    fn show_message(&self, text: &str) {
        self.set_text(text);
        self.set_visible(true);
    }
}

/// Read access to the page's cookie string.
pub trait CookieJar {
    fn cookie_string(&self) -> String;
}

/// Element lookup on a concrete page.
pub trait Dom {
    type Form: FormHandle;
    type Input: InputHandle;
    type Slot: SlotHandle;
    type Link;
    type Cookies: CookieJar;

    fn form(&self, id: &str) -> Option<Self::Form>;
    fn input(&self, id: &str) -> Option<Self::Input>;
    fn slot(&self, id: &str) -> Option<Self::Slot>;
    /// Finds the anchor whose `href` attribute equals `href`.
    fn link_to(&self, href: &str) -> Option<Self::Link>;
    fn cookies(&self) -> Self::Cookies;
}

/// Ids the markup is expected to carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub login_form: String,
    pub username: String,
    pub password: String,
    pub username_error: String,
    pub password_error: String,
    pub reset_container: String,
    pub reset_form: String,
    pub reset_email: String,
    pub reset_message: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            login_form: "login-form".to_string(),
            username: "id_username".to_string(),
            password: "id_password".to_string(),
            username_error: "username-error".to_string(),
            password_error: "password-error".to_string(),
            reset_container: "forgot-password-form".to_string(),
            reset_form: "reset-password-form".to_string(),
            reset_email: "reset-email".to_string(),
            reset_message: "reset-message".to_string(),
        }
    }
}

pub struct LoginPage<D: Dom> {
    pub form: D::Form,
    pub username: D::Input,
    pub password: D::Input,
    pub username_error: D::Slot,
    pub password_error: D::Slot,
}

pub struct ResetPage<D: Dom> {
    pub link: D::Link,
    pub container: D::Slot,
    pub form: D::Form,
    pub email: D::Input,
    pub message: D::Slot,
    pub cookies: D::Cookies,
}

pub struct PageElements<D: Dom> {
    pub login: LoginPage<D>,
    pub reset: ResetPage<D>,
}

impl<D: Dom> PageElements<D> {
    /// Looks up every element both forms need.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingElements`] listing each id (or link
    /// selector) that could not be found.
    pub fn resolve(dom: &D, ids: &ElementIds, reset_url: &str) -> Result<Self, SetupError> {
        let mut missing = Vec::new();

        let form = require(dom.form(&ids.login_form), &ids.login_form, &mut missing);
        let username = require(dom.input(&ids.username), &ids.username, &mut missing);
        let password = require(dom.input(&ids.password), &ids.password, &mut missing);
        let username_error = require(
            dom.slot(&ids.username_error),
            &ids.username_error,
            &mut missing,
        );
        let password_error = require(
            dom.slot(&ids.password_error),
            &ids.password_error,
            &mut missing,
        );
        let link = require(
            dom.link_to(reset_url),
            &link_selector(reset_url),
            &mut missing,
        );
        let container = require(
            dom.slot(&ids.reset_container),
            &ids.reset_container,
            &mut missing,
        );
        let reset_form = require(dom.form(&ids.reset_form), &ids.reset_form, &mut missing);
        let email = require(dom.input(&ids.reset_email), &ids.reset_email, &mut missing);
        let message = require(
            dom.slot(&ids.reset_message),
            &ids.reset_message,
            &mut missing,
        );

        match (
            form,
            username,
            password,
            username_error,
            password_error,
            link,
            container,
            reset_form,
            email,
            message,
        ) {
            (
                Some(form),
                Some(username),
                Some(password),
                Some(username_error),
                Some(password_error),
                Some(link),
                Some(container),
                Some(reset_form),
                Some(email),
                Some(message),
            ) => Ok(Self {
                login: LoginPage {
                    form,
                    username,
                    password,
                    username_error,
                    password_error,
                },
                reset: ResetPage {
                    link,
                    container,
                    form: reset_form,
                    email,
                    message,
                    cookies: dom.cookies(),
                },
            }),
            _ => Err(SetupError::MissingElements(missing)),
        }
    }
}

/// CSS selector for the "forgot password" anchor.
pub fn link_selector(href: &str) -> String {
    format!("a[href=\"{}\"]", href.replace('\\', "\\\\").replace('"', "\\\""))
}

fn require<T>(found: Option<T>, name: &str, missing: &mut Vec<String>) -> Option<T> {
    if found.is_none() {
        missing.push(name.to_string());
    }
    found
}

#[cfg(test)]
mod tests {
    use super::link_selector;

    #[test]
    fn link_selector_quotes_href() {
        assert_eq!(
            link_selector("/password_reset/"),
            "a[href=\"/password_reset/\"]"
        );
    }

    #[test]
    fn link_selector_escapes_quotes() {
        assert_eq!(link_selector("/x\"y"), "a[href=\"/x\\\"y\"]");
    }
}
