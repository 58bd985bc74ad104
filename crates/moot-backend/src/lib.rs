mod client;
mod config;
mod fold;

pub use client::{BackendCall, BackendClient};
pub use config::{BackendConfig, FieldMap};
pub use fold::{fold, FoldOutcome, NO_RESPONSE};
