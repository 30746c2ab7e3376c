//! Core domain types for Brazilian electronic invoices (NFe).
//!
//! This crate is pure: access key parsing and decoding, presentation
//! formatting, the invoice record model, and document sniffing. No I/O.

pub mod access_key;
pub mod error;
pub mod format;
pub mod invoice;
pub mod xml;

// Re-exports
pub use access_key::{AccessKey, KeyFields, ACCESS_KEY_LEN};
pub use error::{CoreError, Result};
pub use invoice::{InvoiceRecord, InvoiceStatus, Issuer, Recipient};
