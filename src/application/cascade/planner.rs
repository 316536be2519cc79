// src/application/cascade/planner.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use super::resolver::CommentThreadResolver;
use crate::application::{ApplicationError, ApplicationResult, dto::AuthenticatedUser};
use crate::domain::{
    blog::{BlogId, BlogRepository, specifications::CanDeleteBlogSpec},
    comment::{CommentId, CommentRepository, specifications::CanRemoveCommentSpec},
    entity::FieldValue,
    filter::Filter,
    reaction::{ReactionId, ReactionRepository},
    specification::Specification,
    user::{UserId, UserRepository, specifications::CanDeleteUserSpec},
};

/// Everything that has to disappear together with a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDeletePlan {
    pub blog_id: BlogId,
    pub comment_ids: Vec<CommentId>,
    pub reaction_ids: Vec<ReactionId>,
}

/// Everything that has to disappear together with a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDeletePlan {
    pub user_id: UserId,
    pub blog_ids: Vec<BlogId>,
    pub comment_ids: Vec<CommentId>,
    pub reaction_ids: Vec<ReactionId>,
}

/// A comment and the replies below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadDeletePlan {
    pub comment_id: CommentId,
    pub reply_ids: Vec<CommentId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePlan {
    Blog(BlogDeletePlan),
    User(UserDeletePlan),
    Thread(ThreadDeletePlan),
}

impl DeletePlan {
    /// Label used in the opaque failure message of the transaction.
    pub fn label(&self) -> &'static str {
        match self {
            DeletePlan::Blog(_) => "Blog",
            DeletePlan::User(_) => "User",
            DeletePlan::Thread(_) => "Comment",
        }
    }

    /// Total number of rows the plan removes, the root included.
    pub fn row_count(&self) -> usize {
        match self {
            DeletePlan::Blog(plan) => 1 + plan.comment_ids.len() + plan.reaction_ids.len(),
            DeletePlan::User(plan) => {
                1 + plan.blog_ids.len() + plan.comment_ids.len() + plan.reaction_ids.len()
            }
            DeletePlan::Thread(plan) => 1 + plan.reply_ids.len(),
        }
    }
}

impl From<BlogDeletePlan> for DeletePlan {
    fn from(plan: BlogDeletePlan) -> Self {
        DeletePlan::Blog(plan)
    }
}

impl From<UserDeletePlan> for DeletePlan {
    fn from(plan: UserDeletePlan) -> Self {
        DeletePlan::User(plan)
    }
}

impl From<ThreadDeletePlan> for DeletePlan {
    fn from(plan: ThreadDeletePlan) -> Self {
        DeletePlan::Thread(plan)
    }
}

/// Computes delete plans. Presence and permission checks happen here, before
/// any transaction is opened; nothing is modified.
pub struct CascadePlanner {
    users: Arc<dyn UserRepository>,
    blogs: Arc<dyn BlogRepository>,
    comments: Arc<dyn CommentRepository>,
    reactions: Arc<dyn ReactionRepository>,
    resolver: CommentThreadResolver,
}

impl CascadePlanner {
    pub fn new(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        comments: Arc<dyn CommentRepository>,
        reactions: Arc<dyn ReactionRepository>,
    ) -> Self {
        let resolver = CommentThreadResolver::new(Arc::clone(&comments));
        Self {
            users,
            blogs,
            comments,
            reactions,
            resolver,
        }
    }

    pub async fn plan_blog_delete(
        &self,
        blog_id: BlogId,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<BlogDeletePlan> {
        let blog = self
            .blogs
            .validate_presence("id", &[blog_id.into()], Some("blog_id"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found(format!("Blog with id {blog_id} not found.")))?;

        if !CanDeleteBlogSpec::new(&blog, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "Only the author or an administrator can delete this blog",
            ));
        }

        let top = self
            .comments
            .get_by_filter(&Filter::new().with("blog_id", [blog_id]), None)
            .await?;
        let comment_ids = self.with_reply_trees(top.iter().map(|c| c.id).collect()).await?;

        let reaction_ids = self
            .reactions
            .get_by_filter(&Filter::new().with("blog_id", [blog_id]), None)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();

        let plan = BlogDeletePlan {
            blog_id,
            comment_ids,
            reaction_ids,
        };
        tracing::debug!(
            blog_id = %blog_id,
            comments = plan.comment_ids.len(),
            reactions = plan.reaction_ids.len(),
            "planned blog delete"
        );
        Ok(plan)
    }

    pub async fn plan_user_delete(
        &self,
        user_id: UserId,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserDeletePlan> {
        if !CanDeleteUserSpec::new(actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "Only an administrator can delete users",
            ));
        }
        if actor.id == user_id {
            return Err(ApplicationError::forbidden("Users cannot delete themselves"));
        }

        self.users
            .validate_presence("id", &[user_id.into()], Some("user_id"), None)
            .await?;

        let blog_ids: Vec<BlogId> = self
            .blogs
            .get_by_filter(&Filter::new().with("created_by", [user_id]), None)
            .await?
            .into_iter()
            .map(|b| b.id)
            .collect();

        let mut roots: BTreeSet<CommentId> = BTreeSet::new();
        if !blog_ids.is_empty() {
            let on_blogs = Filter::new().with("blog_id", blog_ids.iter().copied());
            roots.extend(self.comments.get_by_filter(&on_blogs, None).await?.iter().map(|c| c.id));
        }
        let authored = Filter::new().with("created_by", [user_id]);
        roots.extend(self.comments.get_by_filter(&authored, None).await?.iter().map(|c| c.id));
        let comment_ids = self.with_reply_trees(roots).await?;

        let mut reaction_ids: BTreeSet<ReactionId> = BTreeSet::new();
        if !blog_ids.is_empty() {
            let on_blogs = Filter::new().with("blog_id", blog_ids.iter().copied());
            reaction_ids.extend(self.reactions.get_by_filter(&on_blogs, None).await?.iter().map(|r| r.id));
        }
        let created = Filter::new().with("created_by", [user_id]);
        reaction_ids.extend(self.reactions.get_by_filter(&created, None).await?.iter().map(|r| r.id));

        let plan = UserDeletePlan {
            user_id,
            blog_ids,
            comment_ids,
            reaction_ids: reaction_ids.into_iter().collect(),
        };
        tracing::debug!(
            user_id = %user_id,
            blogs = plan.blog_ids.len(),
            comments = plan.comment_ids.len(),
            reactions = plan.reaction_ids.len(),
            "planned user delete"
        );
        Ok(plan)
    }

    pub async fn plan_thread_delete(
        &self,
        comment_id: CommentId,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ThreadDeletePlan> {
        let value: FieldValue = comment_id.into();
        let comment = self
            .comments
            .validate_presence("id", &[value], Some("comment_id"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ApplicationError::not_found(format!("Comment with id {comment_id} not found."))
            })?;

        if !CanRemoveCommentSpec::new(&comment, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "Only the author or an administrator can remove this comment",
            ));
        }

        let reply_ids = self.resolver.resolve_reply_ids(comment_id).await?;
        Ok(ThreadDeletePlan {
            comment_id,
            reply_ids,
        })
    }

    /// `roots` plus every reply below them, ascending and without repeats.
    async fn with_reply_trees(&self, roots: BTreeSet<CommentId>) -> ApplicationResult<Vec<CommentId>> {
        let mut all = roots;
        let start: Vec<CommentId> = all.iter().copied().collect();
        if !start.is_empty() {
            all.extend(self.resolver.resolve_reply_ids_of(&start).await?);
        }
        Ok(all.into_iter().collect())
    }
}
