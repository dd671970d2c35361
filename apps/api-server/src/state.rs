//! Application state - shared across all handlers.

use std::sync::Arc;

use quire_core::ports::PostRepository;

/// Shared application state.
///
/// Handlers are stateless; the only shared resource is the storage pool behind
/// the repository.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        tracing::info!("Application state initialized");
        Self { posts }
    }
}
