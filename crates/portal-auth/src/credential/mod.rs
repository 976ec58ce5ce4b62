//! Credential lookup against the static user table.

pub mod store;

pub use store::{CredentialStore, StaticCredentialStore};
