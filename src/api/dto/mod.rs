//! Data Transfer Objects for REST request/response serialization.
//!
//! Response envelopes keep the key names existing clients already read
//! (`data`, `post_detail`, `latest post`).

pub mod post_dto;

pub use post_dto::*;
