// tests/support/mocks.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use sqlx::SqlitePool;

use blog_core::application::{
    ApplicationResult,
    ports::{
        security::PasswordHasher,
        time::Clock,
        unit_of_work::{UnitOfWork, UnitOfWorkFactory},
    },
};
use blog_core::domain::{
    entity::FieldValue,
    errors::{DomainError, DomainResult},
    filter::Filter,
    reaction::{NewReaction, Reaction, ReactionId, ReactionRepository},
    repository::{FilteredRepository, Session},
    user::{NewUser, User, UserId, UserRepository},
};
use blog_core::infrastructure::{
    repositories::{SqliteReactionRepository, SqliteUserRepository},
    unit_of_work::SqliteUnitOfWorkFactory,
};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Debug, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Skips Argon2 so registration tests stay fast.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }
}

/// Storage step a [`FaultyReactions`] repository refuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionFault {
    BulkDelete,
    Insert,
}

/// SQLite reaction repository with one operation that always fails.
pub struct FaultyReactions {
    inner: SqliteReactionRepository,
    fault: ReactionFault,
}

impl FaultyReactions {
    pub fn new(pool: SqlitePool, fault: ReactionFault) -> Self {
        Self {
            inner: SqliteReactionRepository::new(pool),
            fault,
        }
    }

    fn check(&self, step: ReactionFault) -> DomainResult<()> {
        if self.fault == step {
            Err(DomainError::Persistence(format!("injected fault on reaction {step:?}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FilteredRepository<Reaction> for FaultyReactions {
    async fn get_by_filter(
        &self,
        filter: &Filter,
        session: Option<&mut Session>,
    ) -> DomainResult<Vec<Reaction>> {
        self.inner.get_by_filter(filter, session).await
    }

    async fn validate_presence(
        &self,
        field: &str,
        values: &[FieldValue],
        error_key: Option<&str>,
        session: Option<&mut Session>,
    ) -> DomainResult<Vec<Reaction>> {
        self.inner
            .validate_presence(field, values, error_key, session)
            .await
    }

    async fn delete_by_id(&self, id: ReactionId, session: Option<&mut Session>) -> DomainResult<()> {
        self.inner.delete_by_id(id, session).await
    }

    async fn delete_many(
        &self,
        ids: &[ReactionId],
        session: Option<&mut Session>,
    ) -> DomainResult<u64> {
        self.check(ReactionFault::BulkDelete)?;
        self.inner.delete_many(ids, session).await
    }
}

#[async_trait]
impl ReactionRepository for FaultyReactions {
    async fn insert(
        &self,
        reaction: NewReaction,
        session: Option<&mut Session>,
    ) -> DomainResult<Reaction> {
        self.check(ReactionFault::Insert)?;
        self.inner.insert(reaction, session).await
    }
}

/// Make every DELETE on `table` abort, as a failing storage step would.
pub async fn fail_deletes_on(pool: &SqlitePool, table: &str) {
    let sql = format!(
        "CREATE TRIGGER fail_{table}_delete BEFORE DELETE ON {table} \
         BEGIN SELECT RAISE(ABORT, 'injected fault'); END;"
    );
    sqlx::query(&sql)
        .execute(pool)
        .await
        .expect("failed to install fault trigger");
}

/// Make deleting row `id` of `table` abort. Other rows delete normally.
pub async fn fail_deletes_of(pool: &SqlitePool, table: &str, id: i64) {
    let sql = format!(
        "CREATE TRIGGER fail_{table}_{id}_delete BEFORE DELETE ON {table} WHEN OLD.id = {id} \
         BEGIN SELECT RAISE(ABORT, 'injected fault'); END;"
    );
    sqlx::query(&sql)
        .execute(pool)
        .await
        .expect("failed to install fault trigger");
}

/// How many units were opened and how each one ended.
#[derive(Debug, Default)]
pub struct UnitTally {
    pub begun: AtomicUsize,
    pub committed: AtomicUsize,
    pub rolled_back: AtomicUsize,
}

impl UnitTally {
    pub fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.begun.load(Ordering::SeqCst),
            self.committed.load(Ordering::SeqCst),
            self.rolled_back.load(Ordering::SeqCst),
        )
    }
}

/// SQLite units of work that report to a shared [`UnitTally`].
pub struct CountingUnits {
    inner: SqliteUnitOfWorkFactory,
    tally: Arc<UnitTally>,
}

impl CountingUnits {
    pub fn new(pool: SqlitePool, tally: Arc<UnitTally>) -> Self {
        Self {
            inner: SqliteUnitOfWorkFactory::new(pool),
            tally,
        }
    }
}

struct CountingUnit {
    inner: Box<dyn UnitOfWork>,
    tally: Arc<UnitTally>,
}

#[async_trait]
impl UnitOfWork for CountingUnit {
    fn session(&mut self) -> &mut Session {
        self.inner.session()
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let CountingUnit { inner, tally } = *self;
        tally.committed.fetch_add(1, Ordering::SeqCst);
        inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        let CountingUnit { inner, tally } = *self;
        tally.rolled_back.fetch_add(1, Ordering::SeqCst);
        inner.rollback().await
    }
}

#[async_trait]
impl UnitOfWorkFactory for CountingUnits {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let inner = self.inner.begin().await?;
        self.tally.begun.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountingUnit {
            inner,
            tally: Arc::clone(&self.tally),
        }))
    }
}

/// SQLite user repository that logs each call and whether it ran inside a
/// unit of work.
pub struct RecordingUsers {
    inner: SqliteUserRepository,
    calls: Arc<Mutex<Vec<(&'static str, bool)>>>,
}

impl RecordingUsers {
    pub fn new(pool: SqlitePool, calls: Arc<Mutex<Vec<(&'static str, bool)>>>) -> Self {
        Self {
            inner: SqliteUserRepository::new(pool),
            calls,
        }
    }

    fn record(&self, call: &'static str, session: &Option<&mut Session>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((call, session.is_some()));
        }
    }
}

#[async_trait]
impl FilteredRepository<User> for RecordingUsers {
    async fn get_by_filter(
        &self,
        filter: &Filter,
        session: Option<&mut Session>,
    ) -> DomainResult<Vec<User>> {
        self.record("get_by_filter", &session);
        self.inner.get_by_filter(filter, session).await
    }

    async fn validate_presence(
        &self,
        field: &str,
        values: &[FieldValue],
        error_key: Option<&str>,
        session: Option<&mut Session>,
    ) -> DomainResult<Vec<User>> {
        self.record("validate_presence", &session);
        self.inner
            .validate_presence(field, values, error_key, session)
            .await
    }

    async fn delete_by_id(&self, id: UserId, session: Option<&mut Session>) -> DomainResult<()> {
        self.record("delete_by_id", &session);
        self.inner.delete_by_id(id, session).await
    }

    async fn delete_many(&self, ids: &[UserId], session: Option<&mut Session>) -> DomainResult<u64> {
        self.record("delete_many", &session);
        self.inner.delete_many(ids, session).await
    }
}

#[async_trait]
impl UserRepository for RecordingUsers {
    async fn count(&self, session: Option<&mut Session>) -> DomainResult<u64> {
        self.record("count", &session);
        self.inner.count(session).await
    }

    async fn insert(&self, new_user: NewUser, session: Option<&mut Session>) -> DomainResult<User> {
        self.record("insert", &session);
        self.inner.insert(new_user, session).await
    }

    async fn update(&self, user: &User, session: Option<&mut Session>) -> DomainResult<User> {
        self.record("update", &session);
        self.inner.update(user, session).await
    }
}
