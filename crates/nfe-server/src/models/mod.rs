// Wire envelopes for the two API endpoints
pub mod convert;
pub mod lookup;
