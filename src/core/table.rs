use chrono::NaiveDate;
use serde_json::{Map, Value};

/// A single typed value inside a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Text(String),
    Float(f64),
    Int(i64),
    Date(NaiveDate),
}

impl Cell {
    /// Map a JSON scalar onto a cell. Strings stay verbatim (the provider's
    /// fundamentals values are strings, including the literal `"None"`);
    /// anything non-scalar is rendered to text.
    pub(crate) fn from_json(value: &Value) -> Cell {
        match value {
            Value::Null => Cell::Null,
            Value::String(s) => Cell::Text(s.clone()),
            Value::Number(n) => n
                .as_i64()
                .map(Cell::Int)
                .or_else(|| n.as_f64().map(Cell::Float))
                .unwrap_or(Cell::Null),
            Value::Bool(b) => Cell::Text(b.to_string()),
            other => Cell::Text(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// Column-ordered rows, the output of the shaping layer and the input to a
/// replace-write. Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row. The row width must match the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width must match column count"
        );
        self.rows.push(row);
    }

    /// One row from a flat JSON object; columns keep the response's key order.
    pub(crate) fn from_record(record: &Map<String, Value>) -> Table {
        let mut table = Table::new(record.keys().cloned().collect());
        table
            .rows
            .push(record.values().map(Cell::from_json).collect());
        table
    }

    /// One row per record. The column set is the union of all record keys in
    /// first-seen order; a key absent from a record becomes a `Null` cell.
    pub(crate) fn from_records<'a>(
        records: impl IntoIterator<Item = &'a Map<String, Value>>,
    ) -> Table {
        let mut table = Table::new(Vec::new());
        for record in records {
            for key in record.keys() {
                if !table.columns.iter().any(|c| c == key) {
                    table.columns.push(key.clone());
                    // backfill rows shaped before this column appeared
                    for row in &mut table.rows {
                        row.push(Cell::Null);
                    }
                }
            }
            let row = table
                .columns
                .iter()
                .map(|column| record.get(column).map_or(Cell::Null, Cell::from_json))
                .collect();
            table.rows.push(row);
        }
        table
    }
}
