use crate::domain::reaction::{Reaction, ReactionStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionDto {
    pub id: i64,
    pub blog_id: i64,
    pub liked_status: ReactionStatus,
    pub liked_by: Option<i64>,
    pub disliked_by: Option<i64>,
    pub created_on: DateTime<Utc>,
}

impl From<Reaction> for ReactionDto {
    fn from(reaction: Reaction) -> Self {
        Self {
            id: reaction.id.into(),
            blog_id: reaction.blog_id.into(),
            liked_status: reaction.status,
            liked_by: reaction.liked_by.map(i64::from),
            disliked_by: reaction.disliked_by.map(i64::from),
            created_on: reaction.audit.created_on,
        }
    }
}
