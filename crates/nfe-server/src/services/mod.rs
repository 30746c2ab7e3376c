//! Service layer: invoice lookup sources and DANFE conversion gateways.
//!
//! Handlers only see the traits defined here, so the simulated lookup and
//! the external conversion provider can each be swapped without touching
//! the HTTP layer.

pub mod converter;
pub mod lookup;
