//! Browser-side wiring for a server-rendered login page.
//!
//! ## Flows
//!
//! ### Login
//!
//! 1. **Validate:** the submit listener trims both fields and checks them
//!    locally; empty fields get inline messages and nothing is sent.
//! 2. **Check:** valid input is sent to the credential-check endpoint as query
//!    parameters. The native submission stays cancelled while it runs.
//! 3. **Submit or explain:** an accepted pair marks the form as submitted and
//!    submits it natively; a rejected pair shows the message matching the
//!    server's classification.
//!
//! ### Password reset
//!
//! 1. **Reveal:** the "forgot password" link shows the hidden reset form.
//! 2. **Request:** the reset form POSTs the email address as JSON with the
//!    `csrftoken` cookie in the `X-CSRFToken` header, then reports the result.
//!
//! Everything below `page` is target-independent; only `page::dom` and the
//! listener wiring touch `web_sys`.

pub mod common;
pub mod features;
pub mod page;
#[cfg(target_arch = "wasm32")]
mod wiring;

#[cfg(target_arch = "wasm32")]
pub use wiring::start;
