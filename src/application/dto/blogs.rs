use crate::domain::blog::Blog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comments::CommentDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub keywords: Option<String>,
    pub author: String,
    pub created_by: i64,
    pub updated_by: i64,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.into(),
            title: blog.title.into(),
            content: blog.content.into(),
            keywords: blog.keywords,
            author: blog.author,
            created_by: blog.audit.created_by.into(),
            updated_by: blog.audit.updated_by.into(),
            created_on: blog.audit.created_on,
            updated_on: blog.audit.updated_on,
        }
    }
}

/// A blog together with everything its read path shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDetailDto {
    pub blog: BlogDto,
    pub comments: Vec<CommentDto>,
    pub likes: u64,
    pub dislikes: u64,
}
