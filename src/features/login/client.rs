//! Credential-check endpoint client. Failures never propagate past
//! [`check_credentials`]; they become a `server_error` classification so the
//! form can show a retry message.

use super::types::{CredentialCheck, LoginInput};
use crate::common::{AppError, api::with_query};
use secrecy::ExposeSecret;
use tracing::{debug, error};

/// Transport for the credential check.
#[allow(async_fn_in_trait)]
pub trait CredentialApi {
    async fn check_credentials(&self, input: &LoginInput) -> Result<CredentialCheck, AppError>;
}

/// Path and query string for a credential check. The result embeds the
/// password and must not be logged.
pub fn credential_check_path(path: &str, input: &LoginInput) -> String {
    with_query(
        path,
        &[
            ("username_or_email", input.username_or_email.as_str()),
            ("password", input.password.expose_secret()),
        ],
    )
}

/// Runs the check, folding every failure into [`CredentialCheck::server_error`].
pub async fn check_credentials<A: CredentialApi>(api: &A, input: &LoginInput) -> CredentialCheck {
    match api.check_credentials(input).await {
        Ok(check) => {
            debug!(
                valid = check.valid,
                error_type = ?check.error_type,
                "credential check response"
            );
            check
        }
        Err(err) => {
            error!(error = %err, "credential check failed");
            CredentialCheck::server_error()
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialApi for crate::common::api::HttpClient {
    async fn check_credentials(&self, input: &LoginInput) -> Result<CredentialCheck, AppError> {
        let url = self.url(&credential_check_path(
            &self.config().check_credentials_path,
            input,
        ));
        crate::common::api::get_json(&url, self.config().request_timeout_ms).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::login::types::CheckErrorType;
    use secrecy::SecretString;

    struct StaticApi(Result<CredentialCheck, AppError>);

    impl CredentialApi for StaticApi {
        async fn check_credentials(
            &self,
            _input: &LoginInput,
        ) -> Result<CredentialCheck, AppError> {
            self.0.clone()
        }
    }

    fn input(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username_or_email: username.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    #[test]
    fn check_path_percent_encodes_both_values() {
        let path = credential_check_path("/check_user_exists_password/", &input("a@b.com", "p@ss word"));
        assert_eq!(
            path,
            "/check_user_exists_password/?username_or_email=a%40b.com&password=p%40ss%20word"
        );
    }

    #[tokio::test]
    async fn passes_through_server_answer() {
        let api = StaticApi(Ok(CredentialCheck {
            valid: false,
            error_type: Some(CheckErrorType::InvalidPassword),
        }));
        let check = check_credentials(&api, &input("alice", "pw")).await;
        assert_eq!(check.error_type, Some(CheckErrorType::InvalidPassword));
    }

    #[tokio::test]
    async fn transport_failure_becomes_server_error() {
        let api = StaticApi(Err(AppError::Http {
            status: 500,
            message: "boom".to_string(),
        }));
        let check = check_credentials(&api, &input("alice", "pw")).await;
        assert_eq!(check, CredentialCheck::server_error());
    }
}
