use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{ChartError, ChartResult};

/// Declared value type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Boolean,
    Number,
    String,
    Date,
    DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub column_type: ColumnType,
}

impl Column {
    /// Creates a column whose label is its id.
    #[must_use]
    pub fn new(id: impl Into<String>, column_type: ColumnType) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            column_type,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Typed cell payload. Each variant maps onto exactly one [`ColumnType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Boolean(bool),
    Number(Number),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    #[must_use]
    pub fn value_type(&self) -> ColumnType {
        match self {
            Self::Boolean(_) => ColumnType::Boolean,
            Self::Number(_) => ColumnType::Number,
            Self::Text(_) => ColumnType::String,
            Self::Date(_) => ColumnType::Date,
            Self::DateTime(_) => ColumnType::DateTime,
        }
    }

    /// Builds a numeric value, rejecting NaN and infinities which have no JSON form.
    pub fn float(value: f64) -> ChartResult<Self> {
        Number::from_f64(value)
            .map(Self::Number)
            .ok_or_else(|| ChartError::InvalidData(format!("number {value} must be finite")))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    column_id: String,
    value: CellValue,
}

impl Cell {
    /// Binds `value` to `column`, checking that the value matches the declared type.
    pub fn new(column: &Column, value: impl Into<CellValue>) -> ChartResult<Self> {
        let value = value.into();
        let found = value.value_type();
        if found != column.column_type {
            return Err(ChartError::CellTypeMismatch {
                column_id: column.id.clone(),
                expected: column.column_type,
                found,
            });
        }
        Ok(Self {
            column_id: column.id.clone(),
            value,
        })
    }

    #[must_use]
    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    #[must_use]
    pub fn value(&self) -> &CellValue {
        &self.value
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Read-only view of tabular data consumed by chart conversion.
///
/// Column order is significant: the first column is the default axis.
pub trait TableSource {
    fn columns(&self) -> &[Column];

    fn rows(&self) -> &[Row];

    fn column_position(&self, id: &str) -> Option<usize> {
        self.columns().iter().position(|column| column.id == id)
    }

    fn column(&self, id: &str) -> Option<&Column> {
        self.columns().iter().find(|column| column.id == id)
    }
}

/// In-memory table with insertion-ordered columns and rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, column: Column) -> ChartResult<&mut Self> {
        if self.column_position(&column.id).is_some() {
            return Err(ChartError::DuplicateColumn(column.id));
        }
        self.columns.push(column);
        Ok(self)
    }

    /// Appends a row. Shape is checked when the table is converted, not here.
    pub fn insert_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }
}

impl TableSource for Table {
    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn rows(&self) -> &[Row] {
        &self.rows
    }
}
