pub mod table;
pub mod value_encoding;

pub use table::{Cell, CellValue, Column, ColumnType, Row, Table, TableSource};
pub use value_encoding::{
    DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT, TemporalFormats, encode_cell_value,
    raw_cell_value,
};
