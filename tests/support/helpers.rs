// tests/support/helpers.rs
use std::sync::Arc;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use blog_core::application::services::{ApplicationServices, ServiceDeps};
use blog_core::bootstrap::sqlite_deps;
use blog_core::infrastructure::database::run_migrations;

use super::mocks::{FixedClock, PlainPasswordHasher};

/// A single long-lived connection keeps the in-memory database alive.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");
    run_migrations(&pool).await.expect("failed to run migrations");
    pool
}

pub struct TestApp {
    pub pool: SqlitePool,
    pub services: ApplicationServices,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_deps(|_, _| {}).await
    }

    /// Build the services after letting the test swap dependencies.
    pub async fn with_deps(customize: impl FnOnce(&mut ServiceDeps, &SqlitePool)) -> Self {
        let pool = memory_pool().await;
        let mut deps = sqlite_deps(&pool, Arc::new(PlainPasswordHasher), Arc::new(FixedClock));
        customize(&mut deps, &pool);
        Self {
            services: ApplicationServices::new(deps),
            pool,
        }
    }
}

pub async fn row_exists(pool: &SqlitePool, table: &str, id: i64) -> bool {
    let sql = format!("SELECT COUNT(*) FROM {table} WHERE id = ?");
    let count: i64 = sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("count query failed");
    count == 1
}

pub async fn existing_ids(pool: &SqlitePool, table: &str, ids: &[i64]) -> Vec<i64> {
    let mut found = Vec::new();
    for id in ids {
        if row_exists(pool, table, *id).await {
            found.push(*id);
        }
    }
    found
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .expect("count query failed")
}
