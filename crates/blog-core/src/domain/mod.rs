//! Domain entities - the core business objects.

mod post;

pub use post::{FieldError, Post, PostChanges, PostDraft};
