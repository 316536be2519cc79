// src/domain/user/entity.rs
use crate::domain::entity::Entity;
use crate::domain::user::value_objects::{EmailAddress, Gender, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub email_id: EmailAddress,
    pub contact_no: Option<String>,
    pub profile_picture_url: Option<String>,
    pub gender: Gender,
    pub role: Role,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    /// `None` for self sign-ups.
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
}

impl Entity for User {
    type Id = UserId;
    const NAME: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub email_id: EmailAddress,
    pub contact_no: Option<String>,
    pub profile_picture_url: Option<String>,
    pub gender: Gender,
    pub role: Role,
    pub created_on: DateTime<Utc>,
    pub created_by: Option<UserId>,
}
