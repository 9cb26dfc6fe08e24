use serde::{Deserialize, Serialize};

/// Role string stored on promoted users. Anything else means no privilege.
pub const ADMIN_ROLE: &str = "admin";

/// Stored user profile, keyed by email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Unique key
    pub email: String,

    /// Display name
    pub name: String,

    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// "admin" or absent. Mutated only by promotion, never by upsert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Caller-suppliable profile fields for the open upsert endpoint
///
/// `role` is deliberately not a field here: the request schema cannot carry
/// a privilege grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUser {
    pub name: String,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_follows_role() {
        let mut profile = UserProfile {
            email: "a@x.com".to_string(),
            name: "Ada".to_string(),
            phone: None,
            role: None,
        };
        assert!(!profile.is_admin());

        profile.role = Some(ADMIN_ROLE.to_string());
        assert!(profile.is_admin());

        profile.role = Some("receptionist".to_string());
        assert!(!profile.is_admin());
    }

    #[test]
    fn upsert_request_cannot_carry_a_role() {
        // A payload smuggling a role field deserializes without it.
        let request: UpsertUser = serde_json::from_str(
            r#"{ "name": "Mallory", "phone": "555-0100", "role": "admin" }"#,
        )
        .unwrap();
        assert_eq!(request.name, "Mallory");

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("role").is_none());
    }
}
