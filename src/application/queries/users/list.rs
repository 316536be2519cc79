use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::{entity::FieldValue, filter::Filter},
};

impl UserQueryService {
    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.get_by_filter(&Filter::new(), None).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// `None` when no account uses `username`.
    pub async fn find_user_by_username(&self, username: &str) -> ApplicationResult<Option<UserDto>> {
        let filter = Filter::new().with("username", [FieldValue::from(username.trim())]);
        let found = self.user_repo.get_by_filter(&filter, None).await?;
        Ok(found.into_iter().next().map(UserDto::from))
    }
}
