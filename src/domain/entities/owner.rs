use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the authenticated user that owns a record.
///
/// Owner ids come from the identity provider (the token subject), so they are
/// opaque text rather than UUIDs. Construction rejects empty or padded values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() || id.trim() != id {
            return None;
        }
        Some(OwnerId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_provider_subjects() {
        let owner = OwnerId::new("108234987123").unwrap();
        assert_eq!(owner.as_str(), "108234987123");
        assert_eq!(owner.to_string(), "108234987123");
    }

    #[test]
    fn rejects_empty_and_padded_ids() {
        assert!(OwnerId::new("").is_none());
        assert!(OwnerId::new("  user-1").is_none());
        assert!(OwnerId::new("user-1\n").is_none());
    }
}
