//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;

/// Shared application state.
///
/// The repository is constructed during application assembly and injected
/// here; handlers only ever see the trait object.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
