use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{User, UserId, UserRepository},
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub(super) async fn load(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .validate_presence("id", &[id.into()], Some("user_id"), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found(format!("User with id {id} not found.")))
    }
}
