pub mod password;
pub mod token;

use std::sync::Arc;

use crate::config::Config;
use crate::store::memory::{MemoryBlogStore, MemoryUserStore};
use crate::store::{BlogStore, UserStore};
use token::TokenService;

/// Shared application state, one instance per process.
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub blogs: Arc<dyn BlogStore>,
    pub tokens: TokenService,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            blogs: Arc::new(MemoryBlogStore::new()),
            tokens: TokenService::new(&config.jwt_secret),
            config,
        }
    }
}
