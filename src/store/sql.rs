//! SQL generation for replace-writes. Pure string building; the statements it
//! emits are deterministic for a given table, which is what makes a repeated
//! replace byte-for-byte idempotent.

use crate::core::{Cell, Table};

/// The column types a replace-write can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SqlType {
    Text,
    Double,
    BigInt,
    Date,
}

impl SqlType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Double => "DOUBLE PRECISION",
            SqlType::BigInt => "BIGINT",
            SqlType::Date => "DATE",
        }
    }
}

/// Infer each column's type from its first non-null cell; an all-null column
/// falls back to TEXT.
pub(crate) fn column_types(table: &Table) -> Vec<SqlType> {
    (0..table.columns().len())
        .map(|i| {
            table
                .rows()
                .iter()
                .find_map(|row| match &row[i] {
                    Cell::Null => None,
                    Cell::Text(_) => Some(SqlType::Text),
                    Cell::Float(_) => Some(SqlType::Double),
                    Cell::Int(_) => Some(SqlType::BigInt),
                    Cell::Date(_) => Some(SqlType::Date),
                })
                .unwrap_or(SqlType::Text)
        })
        .collect()
}

/// Double-quoted identifier with embedded quotes doubled. Column names come
/// straight from provider responses, so they are never interpolated bare.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub(crate) fn drop_table_sql(name: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", quote_ident(name))
}

pub(crate) fn create_table_sql(name: &str, table: &Table, types: &[SqlType]) -> String {
    let columns = table
        .columns()
        .iter()
        .zip(types)
        .map(|(column, ty)| format!("{} {}", quote_ident(column), ty.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE {} ({columns})", quote_ident(name))
}

/// Multi-row INSERT with `$n` placeholders for `row_count` rows.
pub(crate) fn insert_sql(name: &str, columns: &[String], row_count: usize) -> String {
    let column_list = columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");

    let width = columns.len();
    let groups = (0..row_count)
        .map(|row| {
            let placeholders = (0..width)
                .map(|col| format!("${}", row * width + col + 1))
                .collect::<Vec<_>>()
                .join(", ");
            format!("({placeholders})")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({column_list}) VALUES {groups}",
        quote_ident(name)
    )
}
