use std::sync::Arc;

use crate::application::{
    cascade::{CascadePlanner, TransactionCoordinator},
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, time::Clock, unit_of_work::UnitOfWorkFactory},
};
use crate::domain::{
    entity::FieldValue,
    filter::Filter,
    repository::Session,
    user::{UserId, UserRepository},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) units: Arc<dyn UnitOfWorkFactory>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) planner: Arc<CascadePlanner>,
    pub(super) coordinator: Arc<TransactionCoordinator>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        units: Arc<dyn UnitOfWorkFactory>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        planner: Arc<CascadePlanner>,
        coordinator: Arc<TransactionCoordinator>,
    ) -> Self {
        Self {
            user_repo,
            units,
            password_hasher,
            clock,
            planner,
            coordinator,
        }
    }

    /// Conflict when another account already holds `value` in `field`.
    /// `owner` is the account being edited, which may keep its own value.
    pub(super) async fn ensure_available(
        &self,
        field: &str,
        value: &str,
        owner: Option<UserId>,
        session: &mut Session,
    ) -> ApplicationResult<()> {
        let filter = Filter::new().with(field, [FieldValue::from(value)]);
        let taken = self
            .user_repo
            .get_by_filter(&filter, Some(session))
            .await?
            .iter()
            .any(|user| Some(user.id) != owner);
        if taken {
            return Err(ApplicationError::conflict_on(
                field,
                format!("User with {field} {value} already exists."),
            ));
        }
        Ok(())
    }
}
