use serde::{Deserialize, Serialize};

use super::session::{Role, Session};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Login/register answer: the session fields at the top level, optionally
/// with a human readable `message` next to them.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub session: Session,
}
