// src/infrastructure/repositories/blogs.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{
    error::map_sqlx,
    sqlite::{SqliteRecord, SqliteRepository},
};
use crate::domain::{
    audit::AuditStamp,
    blog::{Blog, BlogContent, BlogId, BlogRepository, BlogTitle, NewBlog},
    errors::{DomainError, DomainResult},
    user::UserId,
};

pub type SqliteBlogRepository = SqliteRepository<Blog>;

const BLOG_COLUMNS: &[&str] = &[
    "id",
    "title",
    "content",
    "keywords",
    "author",
    "created_on",
    "updated_on",
    "created_by",
    "updated_by",
];

#[derive(Debug, FromRow)]
pub struct BlogRow {
    id: i64,
    title: String,
    content: String,
    keywords: Option<String>,
    author: String,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
    created_by: i64,
    updated_by: i64,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId::new(row.id)?,
            title: BlogTitle::new(row.title)?,
            content: BlogContent::new(row.content)?,
            keywords: row.keywords,
            author: row.author,
            audit: AuditStamp {
                created_on: row.created_on,
                updated_on: row.updated_on,
                created_by: UserId::new(row.created_by)?,
                updated_by: UserId::new(row.updated_by)?,
            },
        })
    }
}

impl SqliteRecord for Blog {
    type Row = BlogRow;
    const TABLE: &'static str = "blogs";
    const COLUMNS: &'static [&'static str] = BLOG_COLUMNS;

    fn from_row(row: BlogRow) -> DomainResult<Self> {
        Blog::try_from(row)
    }
}

#[async_trait]
impl BlogRepository for SqliteRepository<Blog> {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let NewBlog {
            title,
            content,
            keywords,
            author,
            audit,
        } = blog;

        let sql = format!(
            "INSERT INTO blogs (title, content, keywords, author, created_on, updated_on, created_by, updated_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            BLOG_COLUMNS.join(", ")
        );
        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(keywords)
            .bind(author)
            .bind(audit.created_on)
            .bind(audit.updated_on)
            .bind(i64::from(audit.created_by))
            .bind(i64::from(audit.updated_by))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Blog::try_from(row)
    }

    async fn update(&self, blog: &Blog) -> DomainResult<Blog> {
        let sql = format!(
            "UPDATE blogs SET title = ?, content = ?, keywords = ?, updated_on = ?, updated_by = ? \
             WHERE id = ? RETURNING {}",
            BLOG_COLUMNS.join(", ")
        );
        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(blog.title.as_str())
            .bind(blog.content.as_str())
            .bind(blog.keywords.as_deref())
            .bind(blog.audit.updated_on)
            .bind(i64::from(blog.audit.updated_by))
            .bind(i64::from(blog.id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("blog_id", format!("Blog with id {} not found.", blog.id)))?;

        Blog::try_from(row)
    }
}
