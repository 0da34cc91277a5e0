//! Type-safe post identifier.
//!
//! [`PostId`] is a newtype wrapper around the datastore-assigned `i64`
//! primary key so that post identifiers cannot be confused with other
//! integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a post.
///
/// Assigned by the datastore at insert time and immutable thereafter.
/// Identifiers increase monotonically, so the highest ID is the most
/// recently created post.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Wraps a raw primary key value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw primary key value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(PostId::new(42).to_string(), "42");
    }

    #[test]
    fn serializes_as_bare_number() {
        let Ok(json) = serde_json::to_string(&PostId::new(5)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "5");
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(PostId::new(1) < PostId::new(2));
        assert_eq!(i64::from(PostId::from(9)), 9);
    }
}
