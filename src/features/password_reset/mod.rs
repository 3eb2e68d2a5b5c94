pub mod client;
pub mod controller;
pub mod types;

pub use client::PasswordResetApi;
pub use controller::{PasswordResetController, ResetOutcome};
