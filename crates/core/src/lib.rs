//! Shared domain types for the stockroom service.
//!
//! Deliberately free of I/O and framework dependencies so both the
//! persistence layer and the HTTP layer can depend on it.

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::DbId;
