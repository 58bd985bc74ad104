pub mod canon;
pub mod error;
pub mod types;
pub mod wire;

pub use error::MootError;
pub use types::*;
