use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct GetUserQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let user = self.load(UserId::new(query.id)?).await?;
        Ok(user.into())
    }
}
