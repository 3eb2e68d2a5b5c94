//! Advisory checks run before the credential check. The server validates
//! again; these only spare a round-trip for obviously empty fields.

use super::types::LoginInput;
use regex::Regex;
use secrecy::SecretString;
use std::sync::OnceLock;

pub const USERNAME_INVALID: &str = "Please enter a valid email address or username.";
pub const PASSWORD_EMPTY: &str = "Password cannot be empty.";

/// Per-field messages for a rejected attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

static EMAIL_SHAPE: OnceLock<Option<Regex>> = OnceLock::new();
static WORD_CHARACTER: OnceLock<Option<Regex>> = OnceLock::new();

fn is_match_cached(cell: &OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

/// Loose email shape: something, `@`, something, `.`, something.
pub fn looks_like_email(value: &str) -> bool {
    is_match_cached(&EMAIL_SHAPE, r"\S+@\S+\.\S+", value)
}

/// At least one ASCII letter, digit or underscore.
pub fn has_word_character(value: &str) -> bool {
    is_match_cached(&WORD_CHARACTER, r"[A-Za-z0-9_]", value)
}

/// Trims both raw values and checks them.
///
/// # Errors
///
/// Returns the messages to show when either field is unusable.
pub fn validate(username_or_email: &str, password: &str) -> Result<LoginInput, FieldErrors> {
    let username_or_email = username_or_email.trim();
    let password = password.trim();
    let mut errors = FieldErrors::default();

    if username_or_email.is_empty()
        || !(looks_like_email(username_or_email) || has_word_character(username_or_email))
    {
        errors.username = Some(USERNAME_INVALID);
    }

    if password.is_empty() {
        errors.password = Some(PASSWORD_EMPTY);
    }

    if errors.is_empty() {
        Ok(LoginInput {
            username_or_email: username_or_email.to_string(),
            password: SecretString::from(password.to_string()),
        })
    } else {
        Err(errors)
    }
}
