//! Postgres warehouse writes with replace semantics.
//!
//! Every write drops and recreates its destination table inside one
//! transaction, with the schema inferred from the in-memory table's cells.
//! There is no append or merge path.

mod dataset;
mod sql;

pub use dataset::Dataset;

use std::time::Duration;

use sqlx::postgres::{PgArguments, PgPool, PgPoolOptions};
use sqlx::query::Query;

use crate::core::{AvError, Cell, Table};
use sql::SqlType;

/// Rows per INSERT statement. Even the widest fundamentals table stays far
/// below Postgres's 65535 bind-parameter ceiling at this size.
const INSERT_CHUNK_ROWS: usize = 500;

/// A connection pool to the destination database.
///
/// The pool is released deterministically when the last clone is dropped,
/// error paths included.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connect a small pool to `database_url` (`postgres://...`). The URL is
    /// injected by the caller; nothing is read from the environment here.
    pub async fn connect(database_url: &str) -> Result<Self, AvError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Reuse an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Replace the destination table `name` wholesale with `table`'s contents.
    ///
    /// Drop, recreate with the inferred schema, insert, commit, all in one
    /// transaction: a failure leaves the previous contents untouched and a
    /// rerun with identical input yields an identical destination table.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, table), err, fields(rows = table.len()))
    )]
    pub async fn replace(&self, name: &str, table: &Table) -> Result<(), AvError> {
        let types = sql::column_types(table);

        let mut tx = self.pool.begin().await?;

        sqlx::query(&sql::drop_table_sql(name))
            .execute(&mut *tx)
            .await?;
        sqlx::query(&sql::create_table_sql(name, table, &types))
            .execute(&mut *tx)
            .await?;

        for chunk in table.rows().chunks(INSERT_CHUNK_ROWS) {
            let stmt = sql::insert_sql(name, table.columns(), chunk.len());
            let mut query = sqlx::query(&stmt);
            for row in chunk {
                for (cell, ty) in row.iter().zip(&types) {
                    query = bind_cell(query, cell, *ty);
                }
            }
            query.execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

fn bind_cell<'q>(
    query: Query<'q, sqlx::Postgres, PgArguments>,
    cell: &Cell,
    ty: SqlType,
) -> Query<'q, sqlx::Postgres, PgArguments> {
    // A TEXT column takes every cell as its textual rendering, so a column
    // that inferred TEXT from its first value never chokes on a stray number.
    if ty == SqlType::Text {
        return match cell {
            Cell::Null => query.bind(Option::<String>::None),
            Cell::Text(s) => query.bind(s.clone()),
            Cell::Float(f) => query.bind(f.to_string()),
            Cell::Int(i) => query.bind(i.to_string()),
            Cell::Date(d) => query.bind(d.to_string()),
        };
    }

    match cell {
        Cell::Text(s) => query.bind(s.clone()),
        Cell::Float(f) => query.bind(*f),
        Cell::Int(i) => query.bind(*i),
        Cell::Date(d) => query.bind(*d),
        // NULL still has to carry the column's type on the wire.
        Cell::Null => match ty {
            SqlType::Text => query.bind(Option::<String>::None),
            SqlType::Double => query.bind(Option::<f64>::None),
            SqlType::BigInt => query.bind(Option::<i64>::None),
            SqlType::Date => query.bind(Option::<chrono::NaiveDate>::None),
        },
    }
}
