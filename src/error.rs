use thiserror::Error;

use crate::core::ColumnType;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("'{0}' is not a valid chart type")]
    InvalidChartKind(String),

    #[error("table has no columns")]
    EmptyTable,

    #[error("column `{0}` does not belong to the chart table")]
    ForeignColumn(String),

    #[error("row {row_index} has {actual} cells, expected {expected}")]
    RowShape {
        row_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error(
        "row {row_index} cell {position} belongs to column `{found}`, expected `{expected}`"
    )]
    CellColumnMismatch {
        row_index: usize,
        position: usize,
        expected: String,
        found: String,
    },

    #[error("column `{column_id}` is typed {expected:?} but value is {found:?}")]
    CellTypeMismatch {
        column_id: String,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("duplicate column id `{0}`")]
    DuplicateColumn(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
