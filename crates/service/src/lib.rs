//! Service layer providing CRUD operations on top of models.
//! - Every operation returns a `common::ResponseEnvelope`.
//! - Persistence goes through the `repository::Repository` seam.
//! - Failures keep their cause: validation, not found, conflict, database.

pub mod errors;
pub mod clock;
pub mod repository;
pub mod category_service;
pub mod client_service;
pub mod order_service;
pub mod priority_service;
pub mod registry;
mod respond;
#[cfg(test)]
pub mod test_support;

pub use registry::Services;
pub use repository::Repositories;
