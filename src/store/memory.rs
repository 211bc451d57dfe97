use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::{BlogStore, StoreError, UserStore};
use crate::models::blog::Blog;
use crate::models::user::User;

/// In-memory user collection with a username index for the uniqueness check.
#[derive(Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
    username_index: DashMap<String, Uuid>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| (u.created_at, u.id));
        users
    }

    async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|e| e.value().clone())
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        let id = *self.username_index.get(username)?;
        self.users.get(&id).map(|e| e.value().clone())
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        // Claim the username first so concurrent registrations cannot both
        // pass the uniqueness check.
        match self.username_index.entry(user.username.clone()) {
            Entry::Occupied(_) => return Err(StoreError::DuplicateUsername),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, StoreError> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                *entry = user.clone();
                Ok(user)
            }
            None => Err(StoreError::NotFound),
        }
    }
}

/// In-memory blog collection.
#[derive(Default)]
pub struct MemoryBlogStore {
    blogs: DashMap<Uuid, Blog>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn find_all(&self) -> Vec<Blog> {
        let mut blogs: Vec<Blog> = self.blogs.iter().map(|e| e.value().clone()).collect();
        blogs.sort_by_key(|b| (b.created_at, b.id));
        blogs
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Blog> {
        self.blogs.get(&id).map(|e| e.value().clone())
    }

    async fn insert(&self, blog: Blog) -> Blog {
        self.blogs.insert(blog.id, blog.clone());
        blog
    }

    async fn update(&self, blog: Blog) -> Result<Blog, StoreError> {
        match self.blogs.get_mut(&blog.id) {
            Some(mut entry) => {
                *entry = blog.clone();
                Ok(blog)
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.blogs
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
