use super::UserQueryService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::user::UserId,
};

impl UserQueryService {
    /// Acting principal for a user id. Stands in for request authentication.
    pub async fn principal(&self, id: i64) -> ApplicationResult<AuthenticatedUser> {
        let user = self.load(UserId::new(id)?).await?;
        Ok(AuthenticatedUser::from(&user))
    }
}
