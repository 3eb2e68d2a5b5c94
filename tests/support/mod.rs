//! In-memory page and API doubles shared by the integration tests.

#![allow(dead_code)]

use login_page::common::AppError;
use login_page::features::login::{CredentialApi, CredentialCheck, LoginInput};
use login_page::features::password_reset::{
    PasswordResetApi,
    types::{PasswordResetRequest, PasswordResetResponse},
};
use login_page::page::{
    CookieJar, Dom, ElementIds, FormHandle, InputHandle, PageElements, SlotHandle,
};
use secrecy::ExposeSecret;
use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    rc::Rc,
};

pub const RESET_URL: &str = "/password_reset/";

#[derive(Clone, Default)]
pub struct FakeForm {
    submitted: Rc<Cell<bool>>,
    native_submits: Rc<Cell<u32>>,
}

impl FakeForm {
    pub fn native_submits(&self) -> u32 {
        self.native_submits.get()
    }

    pub fn submitted_flag(&self) -> bool {
        self.submitted.get()
    }
}

impl FormHandle for FakeForm {
    fn is_submitted(&self) -> bool {
        self.submitted.get()
    }

    fn mark_submitted(&self) {
        self.submitted.set(true);
    }

    fn submit(&self) {
        self.native_submits.set(self.native_submits.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct FakeInput {
    value: Rc<RefCell<String>>,
}

impl FakeInput {
    pub fn set(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl InputHandle for FakeInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct FakeSlot {
    text: Rc<RefCell<String>>,
    visible: Rc<Cell<bool>>,
}

impl FakeSlot {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn visible(&self) -> bool {
        self.visible.get()
    }
}

impl SlotHandle for FakeSlot {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

#[derive(Clone, Default)]
pub struct FakeCookies(Rc<RefCell<String>>);

impl FakeCookies {
    pub fn set(&self, cookies: &str) {
        *self.0.borrow_mut() = cookies.to_string();
    }
}

impl CookieJar for FakeCookies {
    fn cookie_string(&self) -> String {
        self.0.borrow().clone()
    }
}

/// A page carrying every expected element unless removed with [`FakePage::without`].
#[derive(Clone, Default)]
pub struct FakePage {
    pub login_form: FakeForm,
    pub username: FakeInput,
    pub password: FakeInput,
    pub username_error: FakeSlot,
    pub password_error: FakeSlot,
    pub reset_container: FakeSlot,
    pub reset_form: FakeForm,
    pub reset_email: FakeInput,
    pub reset_message: FakeSlot,
    pub cookies: FakeCookies,
    absent: Rc<RefCell<HashSet<String>>>,
}

impl FakePage {
    /// Removes an element by id, or the reset link by its `href`.
    pub fn without(self, id: &str) -> Self {
        self.absent.borrow_mut().insert(id.to_string());
        self
    }

    fn present(&self, id: &str) -> bool {
        !self.absent.borrow().contains(id)
    }

    pub fn resolve(&self) -> Result<PageElements<Self>, login_page::common::SetupError> {
        PageElements::resolve(self, &ElementIds::default(), RESET_URL)
    }
}

impl Dom for FakePage {
    type Form = FakeForm;
    type Input = FakeInput;
    type Slot = FakeSlot;
    type Link = ();
    type Cookies = FakeCookies;

    fn form(&self, id: &str) -> Option<Self::Form> {
        let form = match id {
            "login-form" => &self.login_form,
            "reset-password-form" => &self.reset_form,
            _ => return None,
        };
        self.present(id).then(|| form.clone())
    }

    fn input(&self, id: &str) -> Option<Self::Input> {
        let input = match id {
            "id_username" => &self.username,
            "id_password" => &self.password,
            "reset-email" => &self.reset_email,
            _ => return None,
        };
        self.present(id).then(|| input.clone())
    }

    fn slot(&self, id: &str) -> Option<Self::Slot> {
        let slot = match id {
            "username-error" => &self.username_error,
            "password-error" => &self.password_error,
            "forgot-password-form" => &self.reset_container,
            "reset-message" => &self.reset_message,
            _ => return None,
        };
        self.present(id).then(|| slot.clone())
    }

    fn link_to(&self, href: &str) -> Option<Self::Link> {
        (href == RESET_URL && self.present(href)).then_some(())
    }

    fn cookies(&self) -> Self::Cookies {
        self.cookies.clone()
    }
}

/// Credential check double that records what it was asked.
#[derive(Clone)]
pub struct FakeCredentialApi {
    reply: Result<CredentialCheck, AppError>,
    calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl FakeCredentialApi {
    pub fn answering(reply: CredentialCheck) -> Self {
        Self {
            reply: Ok(reply),
            calls: Rc::default(),
        }
    }

    pub fn failing(err: AppError) -> Self {
        Self {
            reply: Err(err),
            calls: Rc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl CredentialApi for FakeCredentialApi {
    async fn check_credentials(&self, input: &LoginInput) -> Result<CredentialCheck, AppError> {
        self.calls.borrow_mut().push((
            input.username_or_email.clone(),
            input.password.expose_secret().to_string(),
        ));
        self.reply.clone()
    }
}

/// Password reset double that records each request and CSRF token.
#[derive(Clone)]
pub struct FakeResetApi {
    reply: Result<PasswordResetResponse, AppError>,
    calls: Rc<RefCell<Vec<(PasswordResetRequest, Option<String>)>>>,
}

impl FakeResetApi {
    pub fn answering(success: bool) -> Self {
        Self {
            reply: Ok(PasswordResetResponse { success }),
            calls: Rc::default(),
        }
    }

    pub fn failing(err: AppError) -> Self {
        Self {
            reply: Err(err),
            calls: Rc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(PasswordResetRequest, Option<String>)> {
        self.calls.borrow().clone()
    }
}

impl PasswordResetApi for FakeResetApi {
    async fn request_password_reset(
        &self,
        request: &PasswordResetRequest,
        csrf_token: Option<&str>,
    ) -> Result<PasswordResetResponse, AppError> {
        self.calls
            .borrow_mut()
            .push((request.clone(), csrf_token.map(str::to_string)));
        self.reply.clone()
    }
}
