// tests/support/builders.rs
use sqlx::SqlitePool;

use blog_core::application::{commands::users::RegisterUserCommand, dto::AuthenticatedUser};
use blog_core::domain::{
    blog::BlogId,
    reaction::ReactionStatus,
    user::{Gender, Role, UserId},
};

use super::mocks::fixed_now;

/// Inserts rows with fixed ids straight into the tables.
pub struct Seed<'a> {
    pool: &'a SqlitePool,
}

impl<'a> Seed<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn user(&self, id: i64, role: Role) -> AuthenticatedUser {
        let name = format!("user{id}");
        sqlx::query(
            "INSERT INTO users (id, name, username, password_hash, email_id, gender, role, created_on, updated_on) \
             VALUES (?, ?, ?, 'plain$secret', ?, 'PREFER_NOT_TO_SAY', ?, ?, ?)",
        )
        .bind(id)
        .bind(&name)
        .bind(&name)
        .bind(format!("{name}@example.com"))
        .bind(role.as_str())
        .bind(fixed_now())
        .bind(fixed_now())
        .execute(self.pool)
        .await
        .expect("failed to seed user");
        AuthenticatedUser::new(UserId(id), name, role)
    }

    pub async fn blog(&self, id: i64, owner: &AuthenticatedUser) -> BlogId {
        sqlx::query(
            "INSERT INTO blogs (id, title, content, author, created_on, updated_on, created_by, updated_by) \
             VALUES (?, ?, 'Body', ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(format!("Blog {id}"))
        .bind(&owner.name)
        .bind(fixed_now())
        .bind(fixed_now())
        .bind(i64::from(owner.id))
        .bind(i64::from(owner.id))
        .execute(self.pool)
        .await
        .expect("failed to seed blog");
        BlogId(id)
    }

    pub async fn comment(&self, id: i64, blog_id: i64, author: &AuthenticatedUser, reply_to: Option<i64>) {
        sqlx::query(
            "INSERT INTO comments (id, text, author_id, blog_id, is_reply_comment, reply_comment_id, created_on, updated_on, created_by, updated_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(format!("comment {id}"))
        .bind(i64::from(author.id))
        .bind(blog_id)
        .bind(reply_to.is_some())
        .bind(reply_to)
        .bind(fixed_now())
        .bind(fixed_now())
        .bind(i64::from(author.id))
        .bind(i64::from(author.id))
        .execute(self.pool)
        .await
        .expect("failed to seed comment");
    }

    pub async fn reaction(&self, id: i64, blog_id: i64, by: &AuthenticatedUser, status: ReactionStatus) {
        let actor = i64::from(by.id);
        let (liked_by, disliked_by) = match status {
            ReactionStatus::Liked => (Some(actor), None),
            ReactionStatus::Disliked => (None, Some(actor)),
        };
        sqlx::query(
            "INSERT INTO blog_reactions (id, blog_id, liked_status, liked_by, disliked_by, created_on, updated_on, created_by, updated_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(blog_id)
        .bind(status.as_str())
        .bind(liked_by)
        .bind(disliked_by)
        .bind(fixed_now())
        .bind(fixed_now())
        .bind(actor)
        .bind(actor)
        .execute(self.pool)
        .await
        .expect("failed to seed reaction");
    }
}

pub struct RegisterUserBuilder {
    name: String,
    username: String,
    password: String,
    email_id: String,
    contact_no: Option<String>,
    role: Option<Role>,
}

impl RegisterUserBuilder {
    pub fn new(username: &str) -> Self {
        Self {
            name: format!("{username} name"),
            username: username.into(),
            password: "correct horse 42".into(),
            email_id: format!("{username}@example.com"),
            contact_no: None,
            role: None,
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email_id = email.into();
        self
    }

    pub fn contact_no(mut self, contact_no: &str) -> Self {
        self.contact_no = Some(contact_no.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    pub fn build(self) -> RegisterUserCommand {
        RegisterUserCommand {
            name: self.name,
            username: self.username,
            password: self.password,
            email_id: self.email_id,
            contact_no: self.contact_no,
            profile_picture_url: None,
            gender: Gender::default(),
            role: self.role,
        }
    }
}
