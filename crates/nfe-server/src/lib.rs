//! NFe lookup and conversion API service.
//!
//! Exposes two JSON endpoints over the domain services: access key lookup
//! (`/api/consultar`) and XML to DANFE conversion (`/api/converter`).

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod settings;
pub mod state;

// Re-exports
pub use error::{AppError, Result};
