//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{DbErr, FromQueryResult, QueryResult, SqlErr, Value};

use quire_core::domain::{Post, PostDraft, PostId};
use quire_core::error::RepoError;
use quire_core::ports::PostRepository;

use super::connections::Storage;
use super::entity::post;

const INSERT_POST: &str = r#"
INSERT INTO posts (title, content, category, tags, created_at, updated_at)
VALUES ($1, $2, $3, $4, now(), now())
RETURNING id, title, content, category, tags, created_at, updated_at
"#;

const SELECT_POST: &str = r#"
SELECT id, title, content, category, tags, created_at, updated_at
FROM posts
WHERE id = $1
"#;

const SELECT_ALL_POSTS: &str = r#"
SELECT id, title, content, category, tags, created_at, updated_at
FROM posts
ORDER BY id
"#;

const UPDATE_POST: &str = r#"
UPDATE posts
SET title = $1, content = $2, category = $3, tags = $4, updated_at = now()
WHERE id = $5
RETURNING id, title, content, category, tags, created_at, updated_at
"#;

const DELETE_POST: &str = "DELETE FROM posts WHERE id = $1";

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    storage: Storage,
}

impl PostgresPostRepository {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        tracing::debug!(title = %draft.title, "Inserting post");

        let row = self
            .storage
            .query_one(INSERT_POST, draft_values(draft))
            .await
            .map_err(repo_error)?
            .ok_or_else(|| RepoError::Query("insert returned no row".to_string()))?;

        into_post(&row)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let row = self
            .storage
            .query_one(SELECT_POST, [Value::from(id.get())])
            .await
            .map_err(repo_error)?;

        row.as_ref().map(into_post).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = self
            .storage
            .query_all(SELECT_ALL_POSTS, [])
            .await
            .map_err(repo_error)?;

        rows.iter().map(into_post).collect()
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %id, "Updating post");

        let mut values = Vec::from(draft_values(draft));
        values.push(id.get().into());

        let row = self
            .storage
            .query_one(UPDATE_POST, values)
            .await
            .map_err(repo_error)?
            .ok_or(RepoError::NotFound)?;

        into_post(&row)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        tracing::debug!(post_id = %id, "Deleting post");

        let result = self
            .storage
            .execute(DELETE_POST, [Value::from(id.get())])
            .await
            .map_err(repo_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.storage.ping().await.map_err(repo_error)
    }
}

fn draft_values(draft: PostDraft) -> [Value; 4] {
    [
        draft.title.into(),
        draft.content.into(),
        draft.category.into(),
        draft.tags.into(),
    ]
}

fn into_post(row: &QueryResult) -> Result<Post, RepoError> {
    let model = post::Model::from_query_result(row, "").map_err(repo_error)?;
    Post::try_from(model).map_err(|e| RepoError::Query(e.to_string()))
}

fn repo_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail))
        | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return RepoError::Constraint(detail);
        }
        _ => {}
    }

    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) => RepoError::NotFound,
        _ => RepoError::Query(err.to_string()),
    }
}
