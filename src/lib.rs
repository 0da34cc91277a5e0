//! # posts-api
//!
//! REST API for creating, reading, updating, and deleting blog posts.
//!
//! Handlers never touch the database directly: they call [`service::PostService`],
//! which delegates to whichever [`persistence::PostStore`] was selected at
//! startup.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PostService (service/)
//!     │
//!     ├── PostStore (persistence/)
//!     │     ├── PostgresPostStore (sqlx::PgPool)
//!     │     └── InMemoryPostStore
//!     │
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod startup;
