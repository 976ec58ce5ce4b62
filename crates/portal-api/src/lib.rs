//! # portal-api
//!
//! HTTP API layer for the bank portal built on Axum.
//!
//! Provides the login, logout, refresh and profile endpoints, password
//! policy checks, health, middleware (CORS, request logging), extractors,
//! DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
