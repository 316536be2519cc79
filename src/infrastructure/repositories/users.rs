// src/infrastructure/repositories/users.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{
    error::map_sqlx,
    sqlite::{SqliteRecord, SqliteRepository},
};
use crate::domain::{
    errors::{DomainError, DomainResult},
    repository::Session,
    user::{EmailAddress, NewUser, PasswordHash, User, UserId, UserRepository, Username},
};
use crate::infrastructure::unit_of_work::connection;

pub type SqliteUserRepository = SqliteRepository<User>;

const USER_COLUMNS: &[&str] = &[
    "id",
    "name",
    "username",
    "password_hash",
    "email_id",
    "contact_no",
    "profile_picture_url",
    "gender",
    "role",
    "created_on",
    "updated_on",
    "created_by",
    "updated_by",
];

#[derive(Debug, FromRow)]
pub struct UserRow {
    id: i64,
    name: String,
    username: String,
    password_hash: String,
    email_id: String,
    contact_no: Option<String>,
    profile_picture_url: Option<String>,
    gender: String,
    role: String,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
    created_by: Option<i64>,
    updated_by: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            name: row.name,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            email_id: EmailAddress::new(row.email_id)?,
            contact_no: row.contact_no,
            profile_picture_url: row.profile_picture_url,
            gender: row.gender.parse()?,
            role: row.role.parse()?,
            created_on: row.created_on,
            updated_on: row.updated_on,
            created_by: row.created_by.map(UserId::new).transpose()?,
            updated_by: row.updated_by.map(UserId::new).transpose()?,
        })
    }
}

impl SqliteRecord for User {
    type Row = UserRow;
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = USER_COLUMNS;

    fn from_row(row: UserRow) -> DomainResult<Self> {
        User::try_from(row)
    }
}

#[async_trait]
impl UserRepository for SqliteRepository<User> {
    async fn count(&self, session: Option<&mut Session>) -> DomainResult<u64> {
        let query = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users");
        let count = match session {
            Some(session) => query.fetch_one(connection(session)?).await,
            None => query.fetch_one(&self.pool).await,
        }
        .map_err(map_sqlx)?;
        Ok(count.max(0) as u64)
    }

    async fn insert(&self, new_user: NewUser, session: Option<&mut Session>) -> DomainResult<User> {
        let NewUser {
            name,
            username,
            password_hash,
            email_id,
            contact_no,
            profile_picture_url,
            gender,
            role,
            created_on,
            created_by,
        } = new_user;

        let sql = format!(
            "INSERT INTO users (name, username, password_hash, email_id, contact_no, profile_picture_url, gender, role, created_on, updated_on, created_by, updated_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            USER_COLUMNS.join(", ")
        );
        let query = sqlx::query_as::<_, UserRow>(&sql)
            .bind(name)
            .bind(username.as_str())
            .bind(password_hash.as_str())
            .bind(email_id.as_str())
            .bind(contact_no)
            .bind(profile_picture_url)
            .bind(gender.as_str())
            .bind(role.as_str())
            .bind(created_on)
            .bind(created_on)
            .bind(created_by.map(i64::from))
            .bind(created_by.map(i64::from));
        let row = match session {
            Some(session) => query.fetch_one(connection(session)?).await,
            None => query.fetch_one(&self.pool).await,
        }
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, user: &User, session: Option<&mut Session>) -> DomainResult<User> {
        let sql = format!(
            "UPDATE users SET name = ?, username = ?, password_hash = ?, email_id = ?, contact_no = ?, \
             profile_picture_url = ?, gender = ?, updated_on = ?, updated_by = ? WHERE id = ? RETURNING {}",
            USER_COLUMNS.join(", ")
        );
        let query = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.name.as_str())
            .bind(user.username.as_str())
            .bind(user.password_hash.as_str())
            .bind(user.email_id.as_str())
            .bind(user.contact_no.as_deref())
            .bind(user.profile_picture_url.as_deref())
            .bind(user.gender.as_str())
            .bind(user.updated_on)
            .bind(user.updated_by.map(i64::from))
            .bind(i64::from(user.id));
        let row = match session {
            Some(session) => query.fetch_optional(connection(session)?).await,
            None => query.fetch_optional(&self.pool).await,
        }
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("user_id", format!("User with id {} not found.", user.id)))?;

        User::try_from(row)
    }
}
