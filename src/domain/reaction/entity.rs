use crate::domain::audit::AuditStamp;
use crate::domain::blog::BlogId;
use crate::domain::entity::{Entity, entity_id};
use crate::domain::errors::DomainError;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

entity_id!(ReactionId, "reaction");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReactionStatus {
    Liked,
    Disliked,
}

impl ReactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionStatus::Liked => "LIKED",
            ReactionStatus::Disliked => "DISLIKED",
        }
    }
}

impl fmt::Display for ReactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKED" => Ok(ReactionStatus::Liked),
            "DISLIKED" => Ok(ReactionStatus::Disliked),
            other => Err(DomainError::Validation(format!(
                "unknown reaction status '{other}'"
            ))),
        }
    }
}

/// A like or dislike of one blog by one user.
#[derive(Debug, Clone)]
pub struct Reaction {
    pub id: ReactionId,
    pub blog_id: BlogId,
    pub status: ReactionStatus,
    pub liked_by: Option<UserId>,
    pub disliked_by: Option<UserId>,
    pub audit: AuditStamp,
}

impl Entity for Reaction {
    type Id = ReactionId;
    const NAME: &'static str = "Reaction";

    fn id(&self) -> ReactionId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewReaction {
    pub blog_id: BlogId,
    pub status: ReactionStatus,
    pub liked_by: Option<UserId>,
    pub disliked_by: Option<UserId>,
    pub audit: AuditStamp,
}

impl NewReaction {
    pub fn new(blog_id: BlogId, status: ReactionStatus, actor: UserId, now: DateTime<Utc>) -> Self {
        let (liked_by, disliked_by) = match status {
            ReactionStatus::Liked => (Some(actor), None),
            ReactionStatus::Disliked => (None, Some(actor)),
        };
        Self {
            blog_id,
            status,
            liked_by,
            disliked_by,
            audit: AuditStamp::new(actor, now),
        }
    }
}
