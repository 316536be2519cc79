// src/infrastructure/repositories/comments.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{
    error::map_sqlx,
    sqlite::{SqliteRecord, SqliteRepository},
};
use crate::domain::{
    audit::AuditStamp,
    blog::BlogId,
    comment::{Comment, CommentId, CommentRepository, CommentText, NewComment},
    errors::{DomainError, DomainResult},
    user::UserId,
};

pub type SqliteCommentRepository = SqliteRepository<Comment>;

const COMMENT_COLUMNS: &[&str] = &[
    "id",
    "text",
    "author_id",
    "blog_id",
    "is_reply_comment",
    "reply_comment_id",
    "created_on",
    "updated_on",
    "created_by",
    "updated_by",
];

#[derive(Debug, FromRow)]
pub struct CommentRow {
    id: i64,
    text: String,
    author_id: i64,
    blog_id: i64,
    is_reply_comment: bool,
    reply_comment_id: Option<i64>,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
    created_by: i64,
    updated_by: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        if row.is_reply_comment != row.reply_comment_id.is_some() {
            return Err(DomainError::Persistence(format!(
                "comment {} has is_reply_comment = {} but reply_comment_id = {:?}",
                row.id, row.is_reply_comment, row.reply_comment_id
            )));
        }
        Ok(Comment {
            id: CommentId::new(row.id)?,
            text: CommentText::new(row.text)?,
            author_id: UserId::new(row.author_id)?,
            blog_id: BlogId::new(row.blog_id)?,
            reply_comment_id: row.reply_comment_id.map(CommentId::new).transpose()?,
            audit: AuditStamp {
                created_on: row.created_on,
                updated_on: row.updated_on,
                created_by: UserId::new(row.created_by)?,
                updated_by: UserId::new(row.updated_by)?,
            },
        })
    }
}

impl SqliteRecord for Comment {
    type Row = CommentRow;
    const TABLE: &'static str = "comments";
    const COLUMNS: &'static [&'static str] = COMMENT_COLUMNS;

    fn from_row(row: CommentRow) -> DomainResult<Self> {
        Comment::try_from(row)
    }
}

#[async_trait]
impl CommentRepository for SqliteRepository<Comment> {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            text,
            author_id,
            blog_id,
            reply_comment_id,
            audit,
        } = comment;

        let sql = format!(
            "INSERT INTO comments (text, author_id, blog_id, is_reply_comment, reply_comment_id, created_on, updated_on, created_by, updated_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            COMMENT_COLUMNS.join(", ")
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(text.as_str())
            .bind(i64::from(author_id))
            .bind(i64::from(blog_id))
            .bind(reply_comment_id.is_some())
            .bind(reply_comment_id.map(i64::from))
            .bind(audit.created_on)
            .bind(audit.updated_on)
            .bind(i64::from(audit.created_by))
            .bind(i64::from(audit.updated_by))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }
}
