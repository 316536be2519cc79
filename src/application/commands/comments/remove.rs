use super::CommentCommandService;
use crate::{
    application::{cascade::DeletePlan, dto::AuthenticatedUser, error::ApplicationResult},
    domain::comment::CommentId,
};

pub struct RemoveCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Remove a comment and every reply below it in one transaction.
    pub async fn remove_comment(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveCommentCommand,
    ) -> ApplicationResult<bool> {
        let id = CommentId::new(command.id)?;
        let plan = self.planner.plan_thread_delete(id, actor).await?;
        self.coordinator
            .execute_delete_transaction(&DeletePlan::from(plan))
            .await
    }
}
