// src/domain/repository.rs
use std::any::Any;

use async_trait::async_trait;

use super::entity::{Entity, FieldValue};
use super::errors::DomainResult;
use super::filter::Filter;

/// Handle of an open unit of work. Repositories run against it when one is
/// supplied and against their shared pool otherwise. Only the storage adapter
/// that opened the session knows what it wraps.
pub struct Session {
    handle: Box<dyn Any + Send>,
}

impl Session {
    pub fn new<H: Any + Send>(handle: H) -> Self {
        Self {
            handle: Box::new(handle),
        }
    }

    /// The wrapped handle, if it is an `H`.
    pub fn handle_mut<H: Any>(&mut self) -> Option<&mut H> {
        self.handle.downcast_mut::<H>()
    }

    /// Take the wrapped handle back out. Returns the session unchanged when
    /// it wraps something else.
    pub fn into_handle<H: Any>(self) -> Result<H, Self> {
        match self.handle.downcast::<H>() {
            Ok(handle) => Ok(*handle),
            Err(handle) => Err(Self { handle }),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

/// Data access shared by every aggregate: filtered reads, presence checks
/// and id based deletes.
#[async_trait]
pub trait FilteredRepository<T: Entity>: Send + Sync {
    /// Rows matching every predicate of `filter`. Never fails on "no match".
    async fn get_by_filter(
        &self,
        filter: &Filter,
        session: Option<&mut Session>,
    ) -> DomainResult<Vec<T>>;

    /// Rows whose `field` is one of `values`. Fails with `NotFound` naming the
    /// values that matched no row; `error_key` defaults to `field`.
    async fn validate_presence(
        &self,
        field: &str,
        values: &[FieldValue],
        error_key: Option<&str>,
        session: Option<&mut Session>,
    ) -> DomainResult<Vec<T>>;

    /// Delete a single row. Fails with `NotFound` when nothing was deleted.
    async fn delete_by_id(&self, id: T::Id, session: Option<&mut Session>) -> DomainResult<()>;

    /// Delete every row in `ids`. Fails with `NotFound` unless each distinct
    /// id removed exactly one row. Returns the number of removed rows.
    async fn delete_many(&self, ids: &[T::Id], session: Option<&mut Session>)
    -> DomainResult<u64>;
}
