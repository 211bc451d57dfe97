use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored blog record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    /// Owning user. Absent on records created before authentication was
    /// required.
    pub user: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    pub fn new(
        title: String,
        author: Option<String>,
        url: String,
        likes: Option<u64>,
        user: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            url,
            likes: likes.unwrap_or(0),
            user,
            created_at: Utc::now(),
        }
    }
}

/// The view of a blog returned by create and update. Only the owning user's
/// id is exposed, never the embedded record.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Uuid>,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
            user: blog.user,
        }
    }
}

/// Reduced owner view joined into list responses. Password data never
/// leaves the store.
#[derive(Debug, Serialize)]
pub struct OwnerSummary {
    pub username: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogListEntry {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user: Option<OwnerSummary>,
}

impl BlogListEntry {
    pub fn new(blog: &Blog, user: Option<OwnerSummary>) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
            user,
        }
    }
}

/// Sparse update payload. Only the keys present in the request are applied;
/// everything else on the record is left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl BlogPatch {
    pub fn apply(&self, blog: &mut Blog) {
        if let Some(title) = &self.title {
            blog.title = title.clone();
        }
        if let Some(author) = &self.author {
            blog.author = Some(author.clone());
        }
        if let Some(url) = &self.url {
            blog.url = url.clone();
        }
        if let Some(likes) = self.likes {
            blog.likes = likes;
        }
    }
}

/// Sum of likes across a list of blogs. Zero for an empty list.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The most-liked blog. The earliest entry wins a tie; `None` for an empty
/// list.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs
        .iter()
        .reduce(|best, blog| if best.likes >= blog.likes { best } else { blog })
}
