use crate::domain::blog::BlogId;
use crate::domain::comment::entity::Comment;
use crate::domain::specification::{OwnerOrElevatedSpec, Specification};
use crate::domain::user::{Role, UserId};

pub struct CanRemoveCommentSpec<'a> {
    comment: &'a Comment,
    actor_id: UserId,
    actor_role: Role,
}

impl<'a> CanRemoveCommentSpec<'a> {
    pub fn new(comment: &'a Comment, actor_id: UserId, actor_role: Role) -> Self {
        Self {
            comment,
            actor_id,
            actor_role,
        }
    }
}

impl Specification for CanRemoveCommentSpec<'_> {
    fn is_satisfied(&self) -> bool {
        OwnerOrElevatedSpec::new(
            self.comment.audit.created_by == self.actor_id,
            self.actor_role.is_elevated(),
        )
        .is_satisfied()
    }
}

/// A reply must stay on the blog of the comment it answers.
pub struct ReplyStaysOnBlogSpec<'a> {
    parent: &'a Comment,
    blog_id: BlogId,
}

impl<'a> ReplyStaysOnBlogSpec<'a> {
    pub fn new(parent: &'a Comment, blog_id: BlogId) -> Self {
        Self { parent, blog_id }
    }
}

impl Specification for ReplyStaysOnBlogSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.parent.blog_id == self.blog_id
    }
}
