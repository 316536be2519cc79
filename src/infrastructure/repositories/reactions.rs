// src/infrastructure/repositories/reactions.rs
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
    errors::{DomainError, DomainResult},
    reaction::{NewReaction, Reaction, ReactionId, ReactionRepository},
    repository::Session,
    user::UserId,
};
use crate::infrastructure::unit_of_work::connection;

pub type SqliteReactionRepository = SqliteRepository<Reaction>;

const REACTION_COLUMNS: &[&str] = &[
    "id",
    "blog_id",
    "liked_status",
    "liked_by",
    "disliked_by",
    "created_on",
    "updated_on",
    "created_by",
    "updated_by",
];

#[derive(Debug, FromRow)]
pub struct ReactionRow {
    id: i64,
    blog_id: i64,
    liked_status: String,
    liked_by: Option<i64>,
    disliked_by: Option<i64>,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
    created_by: i64,
    updated_by: i64,
}

impl TryFrom<ReactionRow> for Reaction {
    type Error = DomainError;

    fn try_from(row: ReactionRow) -> Result<Self, Self::Error> {
        Ok(Reaction {
            id: ReactionId::new(row.id)?,
            blog_id: BlogId::new(row.blog_id)?,
            status: row.liked_status.parse()?,
            liked_by: row.liked_by.map(UserId::new).transpose()?,
            disliked_by: row.disliked_by.map(UserId::new).transpose()?,
            audit: AuditStamp {
                created_on: row.created_on,
                updated_on: row.updated_on,
                created_by: UserId::new(row.created_by)?,
                updated_by: UserId::new(row.updated_by)?,
            },
        })
    }
}

impl SqliteRecord for Reaction {
    type Row = ReactionRow;
    const TABLE: &'static str = "blog_reactions";
    const COLUMNS: &'static [&'static str] = REACTION_COLUMNS;

    fn from_row(row: ReactionRow) -> DomainResult<Self> {
        Reaction::try_from(row)
    }

    fn id_key() -> String {
        "like_dislike_id".into()
    }
}

#[async_trait]
impl ReactionRepository for SqliteRepository<Reaction> {
    async fn insert(
        &self,
        reaction: NewReaction,
        session: Option<&mut Session>,
    ) -> DomainResult<Reaction> {
        let NewReaction {
            blog_id,
            status,
            liked_by,
            disliked_by,
            audit,
        } = reaction;

        let sql = format!(
            "INSERT INTO blog_reactions (blog_id, liked_status, liked_by, disliked_by, created_on, updated_on, created_by, updated_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            REACTION_COLUMNS.join(", ")
        );
        let query = sqlx::query_as::<_, ReactionRow>(&sql)
            .bind(i64::from(blog_id))
            .bind(status.as_str())
            .bind(liked_by.map(i64::from))
            .bind(disliked_by.map(i64::from))
            .bind(audit.created_on)
            .bind(audit.updated_on)
            .bind(i64::from(audit.created_by))
            .bind(i64::from(audit.updated_by));
        let row = match session {
            Some(session) => query.fetch_one(connection(session)?).await,
            None => query.fetch_one(&self.pool).await,
        }
        .map_err(map_sqlx)?;

        Reaction::try_from(row)
    }
}
