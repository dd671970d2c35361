//! Translation between wire types and domain types.

use quire_core::DomainError;
use quire_core::domain::{Post, PostDraft};
use quire_shared::dto::{PostRequest, PostResponse};

/// Validate a create/update body into a draft.
pub fn into_draft(req: PostRequest) -> Result<PostDraft, DomainError> {
    PostDraft::new(req.title, req.content, req.category, req.tags)
}

pub fn into_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.get(),
        title: post.title,
        content: post.content,
        category: post.category,
        tags: post.tags,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}
