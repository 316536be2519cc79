// src/bootstrap.rs
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::{
    ports::{security::PasswordHasher, time::Clock},
    services::{ApplicationServices, ServiceDeps},
};
use crate::infrastructure::{
    repositories::{
        SqliteBlogRepository, SqliteCommentRepository, SqliteReactionRepository,
        SqliteUserRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
    unit_of_work::SqliteUnitOfWorkFactory,
};

/// SQLite backed dependencies with the given hasher and clock.
pub fn sqlite_deps(
    pool: &SqlitePool,
    password_hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
) -> ServiceDeps {
    let blogs = Arc::new(SqliteBlogRepository::new(pool.clone()));
    ServiceDeps {
        users: Arc::new(SqliteUserRepository::new(pool.clone())),
        blogs: blogs.clone(),
        blog_presence: blogs,
        comments: Arc::new(SqliteCommentRepository::new(pool.clone())),
        reactions: Arc::new(SqliteReactionRepository::new(pool.clone())),
        units: Arc::new(SqliteUnitOfWorkFactory::new(pool.clone())),
        password_hasher,
        clock,
    }
}

/// Production wiring: SQLite repositories, Argon2 and the system clock.
pub fn services(pool: &SqlitePool) -> ApplicationServices {
    ApplicationServices::new(sqlite_deps(
        pool,
        Arc::new(Argon2PasswordHasher),
        Arc::new(SystemClock),
    ))
}
