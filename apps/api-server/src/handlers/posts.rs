//! Post CRUD handlers.
//!
//! Path ids that fail to parse are answered exactly like missing posts.

use actix_web::{HttpResponse, web};

use quire_core::DomainError;
use quire_core::domain::{PostDraft, PostId};
use quire_core::search::filter_by_term;
use quire_shared::dto::{PostRequest, PostResponse, SearchParams};

use crate::mapper::{into_draft, into_response};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// A JSON body whose extraction error is reported by the handler itself, so the
/// path id can be validated first.
type JsonBody = Result<web::Json<PostRequest>, actix_web::Error>;

fn parse_id(raw: &str) -> AppResult<PostId> {
    Ok(raw.parse::<PostId>()?)
}

fn parse_body(body: JsonBody) -> AppResult<PostDraft> {
    let req = body
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .into_inner();
    Ok(into_draft(req)?)
}

/// POST /posts
pub async fn create_post(state: web::Data<AppState>, body: JsonBody) -> AppResult<HttpResponse> {
    let draft = parse_body(body)?;
    let post = state.posts.create(draft).await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(into_response(post)))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "post",
            id: id.get(),
        })?;

    Ok(HttpResponse::Ok().json(into_response(post)))
}

/// GET /posts?term=T
///
/// Fetches every post, then keeps those containing `term`. An empty result is a 404.
/// The query is read as raw pairs so a repeated `term` cannot fail extraction.
pub async fn get_all_posts(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let params = SearchParams::from_pairs(query.into_inner());
    let posts = state.posts.find_all().await?;
    let total = posts.len();
    let matched = filter_by_term(posts, &params.term);

    if matched.is_empty() {
        return Err(AppError::NotFound(format!(
            "no post out of {} matches term {:?}",
            total, params.term
        )));
    }

    let body: Vec<PostResponse> = matched.into_iter().map(into_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let draft = parse_body(body)?;
    let post = state.posts.update(id, draft).await?;

    tracing::info!(post_id = %post.id, "Post updated");
    Ok(HttpResponse::Ok().json(into_response(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}
