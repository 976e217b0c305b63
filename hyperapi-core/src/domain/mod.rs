pub mod error;
pub mod model;
pub mod payload;
pub mod routes;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::DomainError;
pub use payload::{BuildOutcome, CreateAutomatedModelRequest, build_create_request};
