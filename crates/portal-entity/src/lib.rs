//! # portal-entity
//!
//! Domain entity models for the bank portal. Entities are immutable value
//! objects loaded from the static credential table.

pub mod user;
