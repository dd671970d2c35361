//! In-memory post repository - data is lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;

use quire_core::domain::{Post, PostDraft, PostId};
use quire_core::error::RepoError;
use quire_core::ports::PostRepository;

struct Store {
    posts: BTreeMap<PostId, Post>,
    last_id: i32,
}

/// In-memory post repository using a BTreeMap with async RwLock.
///
/// Ids are assigned from a counter and never reused, like a `serial` column.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("post id sequence exhausted".to_string()))?;
        let id = PostId::new(next).map_err(|e| RepoError::Query(e.to_string()))?;
        store.last_id = next;

        let now = Utc::now().naive_utc();
        let post = Post {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.posts.values().cloned().collect())
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.title = draft.title;
        post.content = draft.content;
        post.category = draft.category;
        post.tags = draft.tags;
        // Strictly after the previous value, even if the wall clock stalls.
        let now = Utc::now().naive_utc();
        post.updated_at = if now > post.updated_at {
            now
        } else {
            post.updated_at + TimeDelta::microseconds(1)
        };

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
