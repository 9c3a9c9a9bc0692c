//! Authenticated actor model
//!
//! The authentication provider is an external collaborator; this crate only
//! reads the actor it yields. The metadata bag is loosely typed JSON, so the
//! accessors fall back to sensible defaults when fields are absent.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub metadata: JsonValue,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            metadata: JsonValue::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }

    /// Display name from metadata, falling back to the email local part.
    pub fn display_name(&self) -> String {
        self.metadata_str("name")
            .unwrap_or_else(|| self.email.split('@').next().unwrap_or(&self.email).to_string())
    }

    pub fn avatar_url(&self) -> Option<String> {
        self.metadata_str("avatar_url")
    }

    pub fn role_hint(&self) -> Option<String> {
        self.metadata_str("role")
    }

    fn metadata_str(&self, key: &str) -> Option<String> {
        self.metadata
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        let user = CurrentUser::new("u1", "casey@example.com");
        assert_eq!(user.display_name(), "casey");
    }

    #[test]
    fn test_metadata_accessors() {
        let user = CurrentUser::new("u1", "casey@example.com").with_metadata(json!({
            "name": "Casey Jones",
            "avatar_url": "https://img.example/casey.png",
            "role": "organizer",
        }));

        assert_eq!(user.display_name(), "Casey Jones");
        assert_eq!(
            user.avatar_url().as_deref(),
            Some("https://img.example/casey.png")
        );
        assert_eq!(user.role_hint().as_deref(), Some("organizer"));
    }
}
