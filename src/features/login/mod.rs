//! Login form: local validation, the credential check, and the inline error
//! messages that follow from it.

pub mod client;
pub mod controller;
pub mod types;
pub mod validation;

pub use client::CredentialApi;
pub use controller::{InFlightToken, LoginController, LoginOutcome, Rejection, SubmitDecision};
pub use types::{CheckErrorType, CredentialCheck, LoginInput};
