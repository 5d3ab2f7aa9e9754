//! Shared building blocks for the tienda-facil crates: the uniform response
//! envelope, the health payload and the tracing bootstrap.

pub mod types;
pub mod utils;

pub use types::{Health, ResponseEnvelope};
