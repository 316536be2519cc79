use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        specification::Specification,
        user::{
            EmailAddress, PasswordHash, User, UserId, Username,
            specifications::CanUpdateUserSpec,
        },
    },
};

/// Profile edit. Fields left `None` keep their stored value; an empty
/// `contact_no` clears it. Gender and role are not editable here.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub id: i64,
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email_id: Option<String>,
    pub contact_no: Option<String>,
    pub profile_picture_url: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.id)?;
        if !CanUpdateUserSpec::new(id, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "Only the account owner or an administrator can update this user",
            ));
        }

        let name = command
            .name
            .map(|n| n.trim().to_owned())
            .map(|n| {
                if n.is_empty() {
                    Err(ApplicationError::validation("name cannot be empty"))
                } else {
                    Ok(n)
                }
            })
            .transpose()?;
        let username = command.username.map(Username::new).transpose()?;
        let email_id = command.email_id.map(EmailAddress::new).transpose()?;
        let contact_no = command.contact_no.map(|c| c.trim().to_owned());
        let profile_picture_url = command.profile_picture_url;
        let password_hash = match command.password {
            Some(password) => {
                validate_password(&password)?;
                Some(PasswordHash::new(self.password_hasher.hash(&password).await?)?)
            }
            None => None,
        };
        let updated_on = self.clock.now();

        let mut unit = self.units.begin().await?;
        let stored: ApplicationResult<User> = async {
            let session = unit.session();
            let mut user = self
                .user_repo
                .validate_presence("id", &[id.into()], Some("user_id"), Some(&mut *session))
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| ApplicationError::not_found(format!("User with id {id} not found.")))?;

            if let Some(email_id) = email_id {
                self.ensure_available("email_id", email_id.as_str(), Some(id), &mut *session)
                    .await?;
                user.email_id = email_id;
            }
            if let Some(username) = username {
                self.ensure_available("username", username.as_str(), Some(id), &mut *session)
                    .await?;
                user.username = username;
            }
            if let Some(contact) = contact_no {
                if contact.is_empty() {
                    user.contact_no = None;
                } else {
                    self.ensure_available("contact_no", &contact, Some(id), &mut *session)
                        .await?;
                    user.contact_no = Some(contact);
                }
            }
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(password_hash) = password_hash {
                user.password_hash = password_hash;
            }
            if profile_picture_url.is_some() {
                user.profile_picture_url = profile_picture_url;
            }
            user.updated_on = updated_on;
            user.updated_by = Some(actor.id);

            Ok(self.user_repo.update(&user, Some(session)).await?)
        }
        .await;

        match stored {
            Ok(user) => {
                unit.commit().await?;
                tracing::info!(user_id = %user.id, editor = %actor.id, "updated user");
                Ok(user.into())
            }
            Err(err) => {
                if let Err(rollback_err) = unit.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}
