//! "Forgot password" flow: the link reveals the hidden reset form, and the
//! reset form posts the email address with the page's CSRF token.

use super::{client::PasswordResetApi, types::PasswordResetRequest};
use crate::common::get_cookie;
use crate::page::{CookieJar, Dom, InputHandle, ResetPage, SlotHandle};
use tracing::{error, info, warn};

pub const RESET_LINK_SENT: &str = "A reset link has been sent to your email address.";
pub const RESET_LINK_FAILED: &str =
    "There was an error sending the reset link. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    Sent,
    Failed,
    Errored,
}

pub struct PasswordResetController<D: Dom, A: PasswordResetApi> {
    page: ResetPage<D>,
    api: A,
    csrf_cookie: String,
}

impl<D: Dom, A: PasswordResetApi> PasswordResetController<D, A> {
    pub fn new(page: ResetPage<D>, api: A, csrf_cookie: impl Into<String>) -> Self {
        Self {
            page,
            api,
            csrf_cookie: csrf_cookie.into(),
        }
    }

    /// Shows the reset form; bound to the "forgot password" link.
    pub fn reveal(&self) {
        self.page.container.set_visible(true);
    }

    /// Sends the reset request and writes the result into the message element.
    pub async fn submit(&self) -> ResetOutcome {
        let request = PasswordResetRequest {
            email: self.page.email.value(),
        };
        let csrf_token = get_cookie(&self.page.cookies.cookie_string(), &self.csrf_cookie);
        if csrf_token.is_none() {
            warn!(cookie = %self.csrf_cookie, "csrf cookie not found, sending reset without token");
        }

        match self
            .api
            .request_password_reset(&request, csrf_token.as_deref())
            .await
        {
            Ok(response) if response.success => {
                info!("password reset link requested");
                self.page.message.set_text(RESET_LINK_SENT);
                ResetOutcome::Sent
            }
            Ok(_) => {
                warn!("password reset refused by server");
                self.page.message.set_text(RESET_LINK_FAILED);
                ResetOutcome::Failed
            }
            Err(err) => {
                error!(error = %err, "password reset request failed");
                self.page.message.set_text(&format!("Error: {err}"));
                ResetOutcome::Errored
            }
        }
    }
}
