use serde::{Deserialize, Serialize};

/// Role of the signed-in portal user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Signed-in user context handed to operations that depend on who is asking.
///
/// Built once by the composing application after login and passed down
/// explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    pub fn new(user_id: i64, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            name: name.into(),
            role,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Check if user can moderate reports
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
