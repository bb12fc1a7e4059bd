use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - the blog-entry aggregate root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single failed validation rule, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn empty(field: &'static str) -> Self {
        Self {
            field,
            message: "must not be empty",
        }
    }
}

/// Unvalidated input for a new post.
///
/// Validation is separate from persistence: `into_post` either yields a
/// fully-formed [`Post`] or the list of field errors.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    /// Validate the draft and mint a new post with a fresh id and timestamps.
    pub fn into_post(self) -> Result<Post, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::empty("title"));
        }
        if self.content.trim().is_empty() {
            errors.push(FieldError::empty("content"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let now = Utc::now();
        Ok(Post {
            id: Uuid::new_v4(),
            title: self.title,
            content: self.content,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update for an existing post. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    /// Apply a partial update. Provided fields must pass the same non-empty
    /// rule as on creation; `id` and `created_at` never change.
    pub fn apply(&mut self, changes: PostChanges) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(title) = &changes.title {
            if title.trim().is_empty() {
                errors.push(FieldError::empty("title"));
            }
        }
        if let Some(content) = &changes.content {
            if content.trim().is_empty() {
                errors.push(FieldError::empty("content"));
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
