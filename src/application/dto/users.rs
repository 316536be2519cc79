use crate::domain::user::{Gender, Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of a user; the password hash never leaves the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email_id: String,
    pub contact_no: Option<String>,
    pub profile_picture_url: Option<String>,
    pub gender: Gender,
    pub role: Role,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name,
            username: user.username.into(),
            email_id: user.email_id.into(),
            contact_no: user.contact_no,
            profile_picture_url: user.profile_picture_url,
            gender: user.gender,
            role: user.role,
            created_on: user.created_on,
            updated_on: user.updated_on,
        }
    }
}
