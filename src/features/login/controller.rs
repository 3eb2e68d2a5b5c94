//! Login form state machine.
//!
//! A submit is handled in two steps so the browser event can be cancelled
//! synchronously: [`LoginController::begin_submit`] reads and validates the
//! fields and decides whether the native submission must be prevented, and
//! [`LoginController::finish_submit`] runs the credential check and updates
//! the page. The form's `data-submitted` flag lets the native submission pass
//! once the server has accepted the credentials; the in-flight flag stops a
//! second check from starting while one is pending. The flag is owned by the
//! [`InFlightToken`] carried in [`SubmitDecision::Check`] and clears when that
//! token is dropped.

use super::{
    client::{CredentialApi, check_credentials},
    types::{CheckErrorType, CredentialCheck, LoginInput},
    validation::{FieldErrors, validate},
};
use crate::page::{Dom, FormHandle, InputHandle, LoginPage, SlotHandle};
use std::{cell::Cell, rc::Rc};
use tracing::{debug, info};

pub const USER_NOT_FOUND: &str = "This email or username is not registered.";
pub const INCORRECT_PASSWORD: &str = "Incorrect password.";
pub const INVALID_USERNAME: &str = "Invalid username or email.";
pub const INVALID_PASSWORD: &str = "Invalid password.";
pub const TRY_AGAIN_LATER: &str = "An error occurred. Please try again later.";

/// What the submit listener must do with the event.
#[derive(Debug)]
pub enum SubmitDecision {
    /// The form was already accepted; let the browser submit it.
    PassThrough,
    /// A check is already running for an earlier submit.
    Pending,
    /// Local validation failed; messages are on the page.
    Blocked,
    /// Fields look fine; run the credential check.
    Check(LoginInput, InFlightToken),
}

impl SubmitDecision {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

/// Why the server turned the credentials down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    UserNotFound,
    InvalidPassword,
    Unavailable,
    Unspecified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Ignored,
    Blocked,
    Submitted,
    Rejected(Rejection),
}

pub struct LoginController<D: Dom, A: CredentialApi> {
    page: LoginPage<D>,
    api: A,
    in_flight: Rc<Cell<bool>>,
}

impl<D: Dom, A: CredentialApi> LoginController<D, A> {
    pub fn new(page: LoginPage<D>, api: A) -> Self {
        Self {
            page,
            api,
            in_flight: Rc::default(),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Handles one submit event end to end.
    pub async fn submit(&self) -> LoginOutcome {
        match self.begin_submit() {
            SubmitDecision::PassThrough | SubmitDecision::Pending => LoginOutcome::Ignored,
            SubmitDecision::Blocked => LoginOutcome::Blocked,
            SubmitDecision::Check(input, token) => self.finish_submit(input, token).await,
        }
    }

    /// Synchronous part of a submit: guards, field reset and validation.
    pub fn begin_submit(&self) -> SubmitDecision {
        if self.page.form.is_submitted() {
            debug!("login form already submitted");
            return SubmitDecision::PassThrough;
        }
        if self.in_flight.get() {
            debug!("credential check already in flight");
            return SubmitDecision::Pending;
        }

        let username_or_email = self.page.username.value();
        let password = self.page.password.value();

        self.page.username_error.clear();
        self.page.password_error.clear();

        match validate(&username_or_email, &password) {
            Ok(input) => SubmitDecision::Check(input, InFlightToken::acquire(&self.in_flight)),
            Err(errors) => {
                self.show_field_errors(&errors);
                SubmitDecision::Blocked
            }
        }
    }

    /// Asynchronous part of a submit: the credential check and its outcome.
    pub async fn finish_submit(&self, input: LoginInput, token: InFlightToken) -> LoginOutcome {
        let check = check_credentials(&self.api, &input).await;
        drop(token);
        self.apply(&check)
    }

    fn apply(&self, check: &CredentialCheck) -> LoginOutcome {
        if check.valid {
            info!("credentials accepted, submitting login form");
            self.page.form.mark_submitted();
            self.page.form.submit();
            return LoginOutcome::Submitted;
        }

        let rejection = match check.error_type {
            Some(CheckErrorType::UserNotFound) => {
                self.page.username_error.show_message(USER_NOT_FOUND);
                Rejection::UserNotFound
            }
            Some(CheckErrorType::InvalidPassword) => {
                self.page.password_error.show_message(INCORRECT_PASSWORD);
                Rejection::InvalidPassword
            }
            Some(CheckErrorType::ServerError) => {
                self.page.username_error.show_message(TRY_AGAIN_LATER);
                Rejection::Unavailable
            }
            Some(CheckErrorType::Unrecognized) | None => {
                self.page.username_error.show_message(INVALID_USERNAME);
                self.page.password_error.show_message(INVALID_PASSWORD);
                Rejection::Unspecified
            }
        };
        debug!(?rejection, "credentials rejected");
        LoginOutcome::Rejected(rejection)
    }

    fn show_field_errors(&self, errors: &FieldErrors) {
        if let Some(message) = errors.username {
            self.page.username_error.show_message(message);
        }
        if let Some(message) = errors.password {
            self.page.password_error.show_message(message);
        }
    }
}

/// Marks a credential check as running until dropped.
#[derive(Debug)]
pub struct InFlightToken {
    flag: Rc<Cell<bool>>,
}

impl InFlightToken {
    fn acquire(flag: &Rc<Cell<bool>>) -> Self {
        flag.set(true);
        Self {
            flag: Rc::clone(flag),
        }
    }
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
