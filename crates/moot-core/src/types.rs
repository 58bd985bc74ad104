use serde::{Deserialize, Serialize};

/// Session ID format: `ses_<ulid>`
pub type SessionId = String;

/// Speaker of a transcript turn.
///
/// Roles come from the field the backend used to deliver the content,
/// never from the content itself. `Other` carries any role the backend
/// declares that this build does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    System,
    TechnicalAnalyst,
    BusinessAnalyst,
    #[serde(untagged)]
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::System => "system",
            Role::TechnicalAnalyst => "technical_analyst",
            Role::BusinessAnalyst => "business_analyst",
            Role::Other(name) => name,
        }
    }

    /// Map a role string to a `Role`. Unknown names pass through as `Other`.
    pub fn parse(name: &str) -> Role {
        match name {
            "user" => Role::User,
            "system" => Role::System,
            "technical_analyst" => Role::TechnicalAnalyst,
            "business_analyst" => Role::BusinessAnalyst,
            other => Role::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role-tagged message in the transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrips_through_serde() {
        for role in [
            Role::User,
            Role::System,
            Role::TechnicalAnalyst,
            Role::BusinessAnalyst,
            Role::Other("model".to_string()),
        ] {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn known_roles_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::TechnicalAnalyst).unwrap(),
            "\"technical_analyst\""
        );
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[test]
    fn unknown_role_deserializes_as_other() {
        let role: Role = serde_json::from_str("\"moderator\"").unwrap();
        assert_eq!(role, Role::Other("moderator".to_string()));
    }

    #[test]
    fn parse_matches_as_str() {
        for name in ["user", "system", "technical_analyst", "business_analyst", "model"] {
            assert_eq!(Role::parse(name).as_str(), name);
        }
    }
}
