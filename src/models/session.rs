use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role carried in the user profile; drives which shell is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Anything else the backend sends (department, roll number, avatar...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Persisted authenticated session.
///
/// Stored flat: `{ "token": "...", "id": "...", "name": "...", ... }`. Older
/// payloads use `accessToken` instead of `token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(alias = "accessToken")]
    pub token: String,
    #[serde(flatten)]
    pub user: UserProfile,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_access_token_and_mongo_id() {
        let json = r#"{
            "accessToken": "abc",
            "_id": "u1",
            "name": "Ada",
            "email": "ada@learnify.dev",
            "role": "faculty",
            "department": "CS"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.role(), Role::Faculty);
        assert_eq!(session.user.extra.get("department"), Some(&Value::from("CS")));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = r#"{"token":"t","id":"1","name":"x","email":"e","role":"janitor"}"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }
}
