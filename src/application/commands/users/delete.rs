use super::UserCommandService;
use crate::{
    application::{
        cascade::DeletePlan,
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    /// Remove a user with their blogs, comments and reactions, and everything
    /// hanging off those blogs. All or nothing.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<bool> {
        let id = UserId::new(command.id)?;
        let plan = self.planner.plan_user_delete(id, actor).await?;
        self.coordinator
            .execute_delete_transaction(&DeletePlan::from(plan))
            .await
    }
}
