use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Post repository - the storage port used by the HTTP handlers.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. Storage assigns the id and both timestamps.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Every stored post, ordered by id.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace all mutable fields and refresh `updated_at`.
    ///
    /// Returns [`RepoError::NotFound`] when no post has this id.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError>;

    /// Permanently delete a post.
    ///
    /// Returns [`RepoError::NotFound`] when no row was affected.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepoError>;
}
