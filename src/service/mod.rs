//! Service layer: business logic orchestration.
//!
//! [`PostService`] sits between the REST handlers and the storage
//! backend, turning missing rows into not-found errors.

pub mod post_service;

pub use post_service::PostService;
