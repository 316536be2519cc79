// src/application/commands/blogs/delete.rs
use super::BlogCommandService;
use crate::{
    application::{cascade::DeletePlan, dto::AuthenticatedUser, error::ApplicationResult},
    domain::blog::BlogId,
};

pub struct DeleteBlogCommand {
    pub id: i64,
}

impl BlogCommandService {
    /// Delete a blog together with its comments, their reply trees and its
    /// reactions. Fails `NotFound`/`Forbidden` before touching anything.
    pub async fn delete_blog(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteBlogCommand,
    ) -> ApplicationResult<bool> {
        let id = BlogId::new(command.id)?;
        let plan = self.planner.plan_blog_delete(id, actor).await?;
        self.coordinator
            .execute_delete_transaction(&DeletePlan::from(plan))
            .await
    }
}
