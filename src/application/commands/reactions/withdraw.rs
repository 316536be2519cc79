use super::ReactionCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::{blog::BlogId, errors::DomainError},
};

pub struct WithdrawReactionCommand {
    pub blog_id: i64,
}

impl ReactionCommandService {
    pub async fn withdraw_reaction(
        &self,
        actor: &AuthenticatedUser,
        command: WithdrawReactionCommand,
    ) -> ApplicationResult<()> {
        let blog_id = BlogId::new(command.blog_id)?;
        let existing = self.find_own(actor, blog_id).await?.ok_or_else(|| {
            DomainError::not_found(
                "blog_id",
                format!("No reaction by user {} on blog {blog_id}.", actor.id),
            )
        })?;
        self.reaction_repo.delete_by_id(existing.id, None).await?;
        Ok(())
    }
}
