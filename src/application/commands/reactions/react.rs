use super::ReactionCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReactionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::BlogId,
        errors::DomainResult,
        reaction::{NewReaction, Reaction, ReactionStatus},
    },
};

pub struct ReactCommand {
    pub blog_id: i64,
    pub status: ReactionStatus,
}

impl ReactionCommandService {
    /// Like or dislike a blog. Reacting the opposite way replaces the
    /// previous reaction; reacting the same way twice is a conflict.
    pub async fn react(
        &self,
        actor: &AuthenticatedUser,
        command: ReactCommand,
    ) -> ApplicationResult<ReactionDto> {
        let blog_id = BlogId::new(command.blog_id)?;
        self.blogs.ensure_blog_exists(blog_id).await?;

        let new_reaction = NewReaction::new(blog_id, command.status, actor.id, self.clock.now());
        let created = match self.find_own(actor, blog_id).await? {
            Some(existing) if existing.status == command.status => {
                let key = match command.status {
                    ReactionStatus::Liked => "liked_by",
                    ReactionStatus::Disliked => "disliked_by",
                };
                return Err(ApplicationError::conflict_on(
                    key,
                    format!(
                        "Blog {blog_id} is already {} by user {}.",
                        command.status.as_str().to_lowercase(),
                        actor.id
                    ),
                ));
            }
            Some(existing) => self.replace(existing, new_reaction).await?,
            None => self.reaction_repo.insert(new_reaction, None).await?,
        };

        tracing::debug!(reaction_id = %created.id, blog_id = %blog_id, status = %created.status, "recorded reaction");
        Ok(created.into())
    }

    async fn replace(&self, old: Reaction, new_reaction: NewReaction) -> ApplicationResult<Reaction> {
        let failure = || ApplicationError::transaction("Error during Replace Reaction transaction");
        let mut unit = self.units.begin().await.map_err(|err| {
            tracing::warn!(error = %err, "could not begin transaction");
            failure()
        })?;

        let swapped: DomainResult<Reaction> = async {
            self.reaction_repo.delete_by_id(old.id, Some(unit.session())).await?;
            self.reaction_repo.insert(new_reaction, Some(unit.session())).await
        }
        .await;

        match swapped {
            Ok(created) => {
                unit.commit().await.map_err(|err| {
                    tracing::warn!(error = %err, "commit failed");
                    failure()
                })?;
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, reaction_id = %old.id, "reaction swap failed, rolling back");
                if let Err(rollback_err) = unit.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(failure())
            }
        }
    }
}
