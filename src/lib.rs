//! # NFe Fácil
//!
//! Lookup and DANFE conversion services for Brazilian electronic invoices
//!
//! ## Crates
//!
//! - `nfe_core` - access key codec and invoice domain model
//! - `nfe_server` - HTTP API service

// Re-export all sub-crates
pub use nfe_core;
pub use nfe_server;
