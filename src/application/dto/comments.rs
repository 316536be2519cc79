use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub text: String,
    pub author_id: i64,
    pub blog_id: i64,
    pub is_reply_comment: bool,
    pub reply_comment_id: Option<i64>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            is_reply_comment: comment.is_reply(),
            reply_comment_id: comment.reply_comment_id.map(i64::from),
            text: comment.text.into(),
            author_id: comment.author_id.into(),
            blog_id: comment.blog_id.into(),
            created_on: comment.audit.created_on,
            updated_on: comment.audit.updated_on,
        }
    }
}

/// A comment and every comment replying to it, directly or transitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThreadDto {
    pub root: CommentDto,
    pub replies: Vec<CommentDto>,
}
