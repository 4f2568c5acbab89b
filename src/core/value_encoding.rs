use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::CellValue;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// chrono format strings applied to temporal cells in categorical rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalFormats {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

impl Default for TemporalFormats {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl TemporalFormats {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, pattern) in [
            ("date_format", &self.date_format),
            ("datetime_format", &self.datetime_format),
        ] {
            if pattern.is_empty() {
                return Err(ChartError::InvalidSettings(format!(
                    "`{name}` must not be empty"
                )));
            }
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(ChartError::InvalidSettings(format!(
                    "`{name}` is not a valid chrono format: {pattern:?}"
                )));
            }
        }
        Ok(())
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_owned()
}

/// Encodes a cell for a categorical data row.
///
/// Booleans, numbers and text pass through; dates and date-times are rendered
/// as strings with the configured formats.
pub fn encode_cell_value(value: &CellValue, formats: &TemporalFormats) -> ChartResult<Value> {
    let encoded = match value {
        CellValue::Boolean(flag) => Value::Bool(*flag),
        CellValue::Number(number) => Value::Number(number.clone()),
        CellValue::Text(text) => Value::String(text.clone()),
        CellValue::Date(date) => {
            Value::String(render_temporal(date.format(&formats.date_format))?)
        }
        CellValue::DateTime(datetime) => {
            Value::String(render_temporal(datetime.format(&formats.datetime_format))?)
        }
    };
    Ok(encoded)
}

/// Encodes a cell with its plain serde representation (ISO 8601 for temporal values).
pub fn raw_cell_value(value: &CellValue) -> ChartResult<Value> {
    Ok(serde_json::to_value(value)?)
}

// `format!` would panic on an invalid pattern; `write!` reports it instead.
fn render_temporal(formatted: impl std::fmt::Display) -> ChartResult<String> {
    let mut out = String::new();
    write!(out, "{formatted}")
        .map_err(|_| ChartError::InvalidSettings("temporal format failed to render".to_owned()))?;
    Ok(out)
}
