// src/application/cascade/coordinator.rs
use std::sync::Arc;

use super::planner::DeletePlan;
use crate::application::{ApplicationError, ApplicationResult, ports::unit_of_work::UnitOfWorkFactory};
use crate::domain::{
    blog::BlogRepository,
    comment::CommentRepository,
    errors::DomainResult,
    reaction::ReactionRepository,
    repository::Session,
    user::UserRepository,
};

/// Runs a delete plan inside one transaction.
///
/// Children go first (comments, reactions, then blogs for a user plan) and
/// the root row last. Any failure rolls the whole plan back and is reported
/// as an opaque transaction error; the cause only reaches the log.
pub struct TransactionCoordinator {
    units: Arc<dyn UnitOfWorkFactory>,
    users: Arc<dyn UserRepository>,
    blogs: Arc<dyn BlogRepository>,
    comments: Arc<dyn CommentRepository>,
    reactions: Arc<dyn ReactionRepository>,
}

impl TransactionCoordinator {
    pub fn new(
        units: Arc<dyn UnitOfWorkFactory>,
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        comments: Arc<dyn CommentRepository>,
        reactions: Arc<dyn ReactionRepository>,
    ) -> Self {
        Self {
            units,
            users,
            blogs,
            comments,
            reactions,
        }
    }

    pub async fn execute_delete_transaction(&self, plan: &DeletePlan) -> ApplicationResult<bool> {
        let failure = || {
            ApplicationError::transaction(format!("Error during Delete {} transaction", plan.label()))
        };

        let mut unit = self.units.begin().await.map_err(|err| {
            tracing::warn!(error = %err, plan = plan.label(), "could not begin transaction");
            failure()
        })?;

        let applied = self.apply(plan, unit.session()).await;
        if let Err(err) = applied {
            tracing::warn!(error = %err, plan = plan.label(), "delete step failed, rolling back");
            if let Err(rollback_err) = unit.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            return Err(failure());
        }

        unit.commit().await.map_err(|err| {
            tracing::warn!(error = %err, plan = plan.label(), "commit failed");
            failure()
        })?;

        tracing::info!(plan = plan.label(), rows = plan.row_count(), "cascade delete committed");
        Ok(true)
    }

    async fn apply(&self, plan: &DeletePlan, session: &mut Session) -> DomainResult<()> {
        match plan {
            DeletePlan::Blog(plan) => {
                if !plan.comment_ids.is_empty() {
                    self.comments.delete_many(&plan.comment_ids, Some(&mut *session)).await?;
                }
                if !plan.reaction_ids.is_empty() {
                    self.reactions.delete_many(&plan.reaction_ids, Some(&mut *session)).await?;
                }
                self.blogs.delete_by_id(plan.blog_id, Some(session)).await
            }
            DeletePlan::User(plan) => {
                if !plan.comment_ids.is_empty() {
                    self.comments.delete_many(&plan.comment_ids, Some(&mut *session)).await?;
                }
                if !plan.reaction_ids.is_empty() {
                    self.reactions.delete_many(&plan.reaction_ids, Some(&mut *session)).await?;
                }
                if !plan.blog_ids.is_empty() {
                    self.blogs.delete_many(&plan.blog_ids, Some(&mut *session)).await?;
                }
                self.users.delete_by_id(plan.user_id, Some(session)).await
            }
            DeletePlan::Thread(plan) => {
                if !plan.reply_ids.is_empty() {
                    self.comments.delete_many(&plan.reply_ids, Some(&mut *session)).await?;
                }
                self.comments.delete_by_id(plan.comment_id, Some(session)).await
            }
        }
    }
}
