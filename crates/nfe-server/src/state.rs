use std::sync::Arc;

use crate::services::{converter::DanfeConverter, lookup::InvoiceSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<dyn InvoiceSource>,
    pub converter: Arc<dyn DanfeConverter>,
}

impl AppState {
    pub fn new(invoices: Arc<dyn InvoiceSource>, converter: Arc<dyn DanfeConverter>) -> Self {
        Self {
            invoices,
            converter,
        }
    }
}
