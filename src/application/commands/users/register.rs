use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        specification::Specification,
        user::{
            EmailAddress, Gender, NewUser, PasswordHash, Role, User, Username,
            specifications::CanAssignRoleSpec,
        },
    },
};

pub struct RegisterUserCommand {
    pub name: String,
    pub username: String,
    pub password: String,
    pub email_id: String,
    pub contact_no: Option<String>,
    pub profile_picture_url: Option<String>,
    pub gender: Gender,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// Create an account. The head count that picks the role, the uniqueness
    /// checks and the insert share one transaction.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let RegisterUserCommand {
            name,
            username,
            password,
            email_id,
            contact_no,
            profile_picture_url,
            gender,
            role: requested_role,
        } = command;

        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(ApplicationError::validation("name cannot be empty"));
        }
        let username = Username::new(username)?;
        let email_id = EmailAddress::new(email_id)?;
        let contact_no = contact_no
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());
        validate_password(&password)?;
        let password_hash = PasswordHash::new(self.password_hasher.hash(&password).await?)?;
        let created_on = self.clock.now();

        let mut unit = self.units.begin().await?;
        let stored: ApplicationResult<User> = async {
            let session = unit.session();
            let existing = self.user_repo.count(Some(&mut *session)).await?;
            let role = determine_role(existing, actor, requested_role)?;

            self.ensure_available("email_id", email_id.as_str(), None, &mut *session)
                .await?;
            self.ensure_available("username", username.as_str(), None, &mut *session)
                .await?;
            if let Some(contact) = contact_no.as_deref() {
                self.ensure_available("contact_no", contact, None, &mut *session)
                    .await?;
            }

            let new_user = NewUser {
                name,
                username,
                password_hash,
                email_id,
                contact_no,
                profile_picture_url,
                gender,
                role,
                created_on,
                created_by: actor.map(|a| a.id),
            };
            Ok(self.user_repo.insert(new_user, Some(session)).await?)
        }
        .await;

        match stored {
            Ok(user) => {
                unit.commit().await?;
                tracing::info!(user_id = %user.id, role = %user.role, "registered user");
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

/// The first account of an empty store is elevated. Afterwards the elevated
/// role can only be handed out by an elevated requester.
fn determine_role(
    existing: u64,
    actor: Option<&AuthenticatedUser>,
    requested: Option<Role>,
) -> ApplicationResult<Role> {
    if existing == 0 {
        return Ok(Role::Toaa);
    }
    let requested = requested.unwrap_or_default();
    if !CanAssignRoleSpec::new(actor.map(|a| a.role), requested).is_satisfied() {
        return Err(ApplicationError::forbidden(
            "only an administrator can grant the elevated role",
        ));
    }
    Ok(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[test]
    fn first_user_is_elevated() {
        assert_eq!(determine_role(0, None, None).unwrap(), Role::Toaa);
        assert_eq!(determine_role(0, None, Some(Role::Member)).unwrap(), Role::Toaa);
    }

    #[test]
    fn later_users_default_to_member() {
        assert_eq!(determine_role(3, None, None).unwrap(), Role::Member);
    }

    #[test]
    fn elevated_role_needs_an_elevated_requester() {
        let member = AuthenticatedUser::new(UserId(2), "m", Role::Member);
        let admin = AuthenticatedUser::new(UserId(1), "a", Role::Toaa);
        assert!(determine_role(3, None, Some(Role::Toaa)).is_err());
        assert!(determine_role(3, Some(&member), Some(Role::Toaa)).is_err());
        assert_eq!(
            determine_role(3, Some(&admin), Some(Role::Toaa)).unwrap(),
            Role::Toaa
        );
    }
}
