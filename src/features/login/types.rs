//! Request and response types for the credential check. `LoginInput` carries
//! the password and must never be logged; its `Debug` output redacts it.

use secrecy::SecretString;
use serde::Deserialize;

/// Trimmed, locally validated form values.
#[derive(Debug)]
pub struct LoginInput {
    pub username_or_email: String,
    pub password: SecretString,
}

/// Server-side failure classification.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckErrorType {
    UserNotFound,
    InvalidPassword,
    /// Synthesized locally when the check itself could not be completed.
    ServerError,
    #[serde(other)]
    Unrecognized,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CredentialCheck {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub error_type: Option<CheckErrorType>,
}

impl CredentialCheck {
    pub fn server_error() -> Self {
        Self {
            valid: false,
            error_type: Some(CheckErrorType::ServerError),
        }
    }
}
