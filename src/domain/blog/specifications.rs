use crate::domain::blog::entity::Blog;
use crate::domain::specification::{OwnerOrElevatedSpec, Specification};
use crate::domain::user::{Role, UserId};

pub struct CanDeleteBlogSpec<'a> {
    blog: &'a Blog,
    actor_id: UserId,
    actor_role: Role,
}

impl<'a> CanDeleteBlogSpec<'a> {
    pub fn new(blog: &'a Blog, actor_id: UserId, actor_role: Role) -> Self {
        Self {
            blog,
            actor_id,
            actor_role,
        }
    }
}

impl Specification for CanDeleteBlogSpec<'_> {
    fn is_satisfied(&self) -> bool {
        OwnerOrElevatedSpec::new(
            self.blog.audit.created_by == self.actor_id,
            self.actor_role.is_elevated(),
        )
        .is_satisfied()
    }
}

/// Editing follows the same rule as deleting: the creator or an elevated
/// user.
pub struct CanUpdateBlogSpec<'a> {
    blog: &'a Blog,
    actor_id: UserId,
    actor_role: Role,
}

impl<'a> CanUpdateBlogSpec<'a> {
    pub fn new(blog: &'a Blog, actor_id: UserId, actor_role: Role) -> Self {
        Self {
            blog,
            actor_id,
            actor_role,
        }
    }
}

impl Specification for CanUpdateBlogSpec<'_> {
    fn is_satisfied(&self) -> bool {
        OwnerOrElevatedSpec::new(
            self.blog.audit.created_by == self.actor_id,
            self.actor_role.is_elevated(),
        )
        .is_satisfied()
    }
}
