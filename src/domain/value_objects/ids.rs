//! # Request Identifiers
//!
//! Correlation identifier carried by every quote request.
//!
//! Hosts that already track a checkout session can inject their own id
//! through the request builder; otherwise a fresh v4 UUID is generated.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generates a new random identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    #[must_use]
    #[inline]
    pub const fn get(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_v4_is_unique() {
        assert_ne!(RequestId::new_v4(), RequestId::new_v4());
    }

    #[test]
    fn from_uuid_preserves_value() {
        let raw = Uuid::new_v4();
        let id = RequestId::from_uuid(raw);
        assert_eq!(id.get(), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn serde_is_transparent() {
        let id = RequestId::new_v4();
        let json = serde_json::to_string(&id).unwrap();
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
