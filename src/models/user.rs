use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored user record. The password hash and the back-reference list never
/// appear in API responses; see [`UserResponse`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub adult: bool,
    /// Ids of blogs created by this user, appended on every create.
    pub blogs: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: String,
        name: Option<String>,
        password_hash: String,
        adult: Option<bool>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            adult: adult.unwrap_or(true),
            blogs: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// The view of a user exposed across the API boundary.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub adult: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            adult: user.adult,
        }
    }
}
