// src/infrastructure/repositories/sqlite.rs
use std::collections::HashSet;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, sqlite::SqliteRow};

use super::error::map_sqlx;
use crate::domain::{
    entity::{Entity, FieldValue},
    errors::{DomainError, DomainResult},
    filter::{Filter, join_values},
    repository::{FilteredRepository, Session},
};
use crate::infrastructure::unit_of_work::connection;

/// Table mapping for an entity stored in SQLite.
pub trait SqliteRecord: Entity {
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    const TABLE: &'static str;

    /// Columns selected for every read. Filters may only name these.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: Self::Row) -> DomainResult<Self>;

    /// Key reported when a row of this table is missing, e.g. `blog_id`.
    fn id_key() -> String {
        format!("{}_id", Self::NAME.to_lowercase())
    }
}

/// Filtered-repository implementation shared by every table.
pub struct SqliteRepository<T> {
    pub(super) pool: SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> SqliteRepository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<T> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Sqlite>, value: &FieldValue) {
    match value {
        FieldValue::Int(v) => builder.push_bind(*v),
        FieldValue::Text(v) => builder.push_bind(v.clone()),
        FieldValue::Bool(v) => builder.push_bind(*v),
    };
}

impl<T: SqliteRecord> SqliteRepository<T> {
    fn ensure_column(field: &str) -> DomainResult<()> {
        if T::COLUMNS.contains(&field) {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "{} cannot be filtered by unknown field '{field}'",
                T::NAME
            )))
        }
    }

    fn select_query(filter: &Filter) -> DomainResult<QueryBuilder<'static, Sqlite>> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {} FROM {}", T::COLUMNS.join(", "), T::TABLE));

        for (index, (field, values)) in filter.predicates().enumerate() {
            Self::ensure_column(field)?;
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            builder.push(field);
            builder.push(" IN (");
            for (position, value) in values.iter().enumerate() {
                if position > 0 {
                    builder.push(", ");
                }
                push_value(&mut builder, value);
            }
            builder.push(")");
        }

        builder.push(" ORDER BY id");
        Ok(builder)
    }

    /// Positions of the requested values that no row carries in `field`.
    /// SQLite does the comparison, with the same affinity rules as `IN`.
    fn missing_query(field: &str, requested: &[&FieldValue]) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new("WITH requested(pos, value) AS (VALUES ");
        for (pos, value) in requested.iter().enumerate() {
            if pos > 0 {
                builder.push(", ");
            }
            builder.push("(");
            builder.push_bind(pos as i64);
            builder.push(", ");
            push_value(&mut builder, value);
            builder.push(")");
        }
        builder.push(format!(
            ") SELECT pos FROM requested WHERE NOT EXISTS \
             (SELECT 1 FROM {table} WHERE {table}.{field} = requested.value) ORDER BY pos",
            table = T::TABLE
        ));
        builder
    }
}

#[async_trait]
impl<T: SqliteRecord> FilteredRepository<T> for SqliteRepository<T> {
    async fn get_by_filter(
        &self,
        filter: &Filter,
        session: Option<&mut Session>,
    ) -> DomainResult<Vec<T>> {
        let mut builder = Self::select_query(filter)?;
        if filter.matches_nothing() {
            return Ok(Vec::new());
        }

        let query = builder.build_query_as::<T::Row>();
        let rows = match session {
            Some(session) => query.fetch_all(connection(session)?).await,
            None => query.fetch_all(&self.pool).await,
        }
        .map_err(map_sqlx)?;

        rows.into_iter().map(T::from_row).collect()
    }

    async fn validate_presence(
        &self,
        field: &str,
        values: &[FieldValue],
        error_key: Option<&str>,
        mut session: Option<&mut Session>,
    ) -> DomainResult<Vec<T>> {
        Self::ensure_column(field)?;
        let mut seen = HashSet::with_capacity(values.len());
        let requested: Vec<&FieldValue> = values.iter().filter(|v| seen.insert(*v)).collect();
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = Self::missing_query(field, &requested);
        let query = builder.build_query_scalar::<i64>();
        let positions = match session.as_deref_mut() {
            Some(session) => query.fetch_all(connection(session)?).await,
            None => query.fetch_all(&self.pool).await,
        }
        .map_err(map_sqlx)?;

        let missing: Vec<FieldValue> = positions
            .into_iter()
            .filter_map(|pos| usize::try_from(pos).ok())
            .filter_map(|pos| requested.get(pos).map(|value| (*value).clone()))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::not_found(
                error_key.unwrap_or(field),
                format!("{} with {field} {} not found.", T::NAME, join_values(&missing)),
            ));
        }

        let filter = Filter::new().with(field, requested.into_iter().cloned());
        self.get_by_filter(&filter, session).await
    }

    async fn delete_by_id(&self, id: T::Id, session: Option<&mut Session>) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let query = sqlx::query(&sql).bind(Into::<i64>::into(id));
        let result = match session {
            Some(session) => query.execute(connection(session)?).await,
            None => query.execute(&self.pool).await,
        }
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                T::id_key(),
                format!("{} with id {id} not found.", T::NAME),
            ));
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[T::Id], session: Option<&mut Session>) -> DomainResult<u64> {
        let mut seen = HashSet::with_capacity(ids.len());
        let distinct: Vec<i64> = ids
            .iter()
            .filter(|id| seen.insert(**id))
            .map(|id| (*id).into())
            .collect();
        if distinct.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("DELETE FROM {} WHERE id IN (", T::TABLE));
        let mut separated = builder.separated(", ");
        for id in &distinct {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let query = builder.build();
        let result = match session {
            Some(session) => query.execute(connection(session)?).await,
            None => query.execute(&self.pool).await,
        }
        .map_err(map_sqlx)?;

        let affected = result.rows_affected();
        if affected != distinct.len() as u64 {
            let listed: Vec<FieldValue> = distinct.iter().copied().map(FieldValue::Int).collect();
            return Err(DomainError::not_found(
                T::id_key(),
                format!(
                    "{} entities with ids {} not found: {affected} of {} deleted.",
                    T::NAME,
                    join_values(&listed),
                    distinct.len()
                ),
            ));
        }
        Ok(affected)
    }
}
