pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::blog::Blog;
use crate::models::user::User;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,
    #[error("username must be unique")]
    DuplicateUsername,
}

/// Persisted user collection. The engine behind it is an external
/// collaborator; the in-process implementation lives in [`memory`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> Vec<User>;
    async fn find_by_id(&self, id: Uuid) -> Option<User>;
    async fn find_by_username(&self, username: &str) -> Option<User>;
    /// Rejects with [`StoreError::DuplicateUsername`] instead of storing a
    /// second record under an existing username.
    async fn insert(&self, user: User) -> Result<User, StoreError>;
    async fn update(&self, user: User) -> Result<User, StoreError>;
}

/// Persisted blog collection.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn find_all(&self) -> Vec<Blog>;
    async fn find_by_id(&self, id: Uuid) -> Option<Blog>;
    async fn insert(&self, blog: Blog) -> Blog;
    async fn update(&self, blog: Blog) -> Result<Blog, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
