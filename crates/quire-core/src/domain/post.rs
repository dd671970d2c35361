use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::DomainError;

/// Storage-assigned identifier of a post. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(i32);

impl PostId {
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::InvalidId(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value: i32 = raw
            .parse()
            .map_err(|_| DomainError::InvalidId(raw.to_string()))?;
        Self::new(value).map_err(|_| DomainError::InvalidId(raw.to_string()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post entity - a blog post as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Post {
    /// Case-sensitive substring match against title, content, category or any tag.
    ///
    /// An empty term matches every post.
    pub fn matches(&self, term: &str) -> bool {
        self.title.contains(term)
            || self.content.contains(term)
            || self.category.contains(term)
            || self.tags.iter().any(|tag| tag.contains(term))
    }
}

/// The mutable fields of a post, validated.
///
/// Used as the full replacement payload for both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl PostDraft {
    pub fn new(
        title: String,
        content: String,
        category: String,
        tags: Vec<String>,
    ) -> Result<Self, DomainError> {
        if title.is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if content.is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }
        if category.is_empty() {
            return Err(DomainError::Validation("category is required".to_string()));
        }
        if tags.iter().any(String::is_empty) {
            return Err(DomainError::Validation("tags must not be empty strings".to_string()));
        }

        Ok(Self {
            title,
            content,
            category,
            tags,
        })
    }
}
