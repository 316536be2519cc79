// src/infrastructure/unit_of_work.rs
use async_trait::async_trait;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::application::ports::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use crate::domain::{
    errors::{DomainError, DomainResult},
    repository::Session,
};
use crate::infrastructure::repositories::map_sqlx;

type SqliteTransaction = Transaction<'static, Sqlite>;

/// Connection behind a session opened by [`SqliteUnitOfWorkFactory`].
pub(crate) fn connection(session: &mut Session) -> DomainResult<&mut SqliteConnection> {
    session
        .handle_mut::<SqliteTransaction>()
        .map(|tx| &mut **tx)
        .ok_or_else(foreign_session)
}

fn foreign_session() -> DomainError {
    DomainError::Persistence("session was not opened by the SQLite store".into())
}

/// A transaction on a connection checked out of the pool. The connection
/// returns to the pool once the unit ends.
pub struct SqliteUnitOfWork {
    session: Session,
}

impl SqliteUnitOfWork {
    fn into_transaction(self) -> DomainResult<SqliteTransaction> {
        self.session
            .into_handle::<SqliteTransaction>()
            .map_err(|_| foreign_session())
    }
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    fn session(&mut self) -> &mut Session {
        &mut self.session
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let tx = (*self).into_transaction()?;
        tx.commit().await.map_err(map_sqlx)
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        let tx = (*self).into_transaction()?;
        tx.rollback().await.map_err(map_sqlx)
    }
}

#[derive(Clone)]
pub struct SqliteUnitOfWorkFactory {
    pool: SqlitePool,
}

impl SqliteUnitOfWorkFactory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for SqliteUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(SqliteUnitOfWork {
            session: Session::new(tx),
        }))
    }
}
