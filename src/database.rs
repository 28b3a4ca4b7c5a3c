use crate::error::BlogError;
use crate::model::Post;
use crate::seed;

/// Read-only post store. Posts are kept most recent first, and a post's
/// index is its position in that order.
#[derive(Clone, Debug)]
pub struct Database {
    posts: Vec<Post>,
}

impl Database {
    pub fn new(mut posts: Vec<Post>) -> Database {
        // Stable, so posts sharing a date keep their seed order.
        posts.sort_by(|a, b| b.date().cmp(a.date()));
        Database { posts: posts }
    }

    pub fn seeded() -> Result<Database, BlogError> {
        Ok(Database::new(seed::posts()?))
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, index: usize) -> Result<&Post, BlogError> {
        self.posts.get(index).ok_or_else(|| BlogError::NotFound(index.to_string()))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
