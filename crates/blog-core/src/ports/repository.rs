use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - the sole data-access seam of the platform.
///
/// Implementations are constructed explicitly and handed to the application
/// assembly; there is no ambient global connection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, oldest first. An empty collection is not an error.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist a new post, returning it as stored.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Replace the stored record for `post.id`.
    /// Fails with [`RepoError::NotFound`] when no record matches.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post. Fails with [`RepoError::NotFound`] when no record matches.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
