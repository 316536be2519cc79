use crate::domain::audit::AuditStamp;
use crate::domain::blog::BlogId;
use crate::domain::entity::{Entity, entity_id};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

entity_id!(CommentId, "comment");

const MAX_TEXT_LEN: usize = 1028;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::Validation(format!(
                "comment must be at most {MAX_TEXT_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CommentText> for String {
    fn from(value: CommentText) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub text: CommentText,
    pub author_id: UserId,
    pub blog_id: BlogId,
    /// Parent comment for replies; top-level comments have none.
    pub reply_comment_id: Option<CommentId>,
    pub audit: AuditStamp,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.reply_comment_id.is_some()
    }
}

impl Entity for Comment {
    type Id = CommentId;
    const NAME: &'static str = "Comment";

    fn id(&self) -> CommentId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: CommentText,
    pub author_id: UserId,
    pub blog_id: BlogId,
    pub reply_comment_id: Option<CommentId>,
    pub audit: AuditStamp,
}
