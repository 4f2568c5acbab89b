use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ChartResult;

use super::options::{ChartOptions, is_raw_expression};

/// Key of the label field in a single-series data point.
pub const COL_LABEL: &str = "label";
/// Key of the value field in a single-series data point.
pub const COL_VALUE: &str = "value";

/// One Donut slice: the first column's label with a row's first cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    pub label: String,
    pub value: Value,
}

/// Row object keyed by column id, in column order.
pub type RowObject = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    /// Area/Bar/Line shape.
    Categorical {
        xkey: String,
        ykeys: Vec<String>,
        labels: Vec<String>,
        data: Vec<RowObject>,
    },
    /// Donut shape.
    SingleSeries { data: Vec<DonutSegment> },
}

impl ChartLayout {
    #[must_use]
    pub fn data_len(&self) -> usize {
        match self {
            Self::Categorical { data, .. } => data.len(),
            Self::SingleSeries { data } => data.len(),
        }
    }
}

/// A top-level field of the emitted object.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigField {
    Json(Value),
    /// Callback source text written without quotes.
    RawExpression(String),
}

/// Converted chart, ready to be emitted as a Morris constructor argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub element: String,
    pub layout: ChartLayout,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Merged top-level fields: structural fields first, then options.
    ///
    /// An option named like a structural field replaces its value but keeps
    /// its position.
    pub fn fields(&self) -> ChartResult<IndexMap<String, ConfigField>> {
        let mut fields = IndexMap::new();
        fields.insert(
            "element".to_owned(),
            ConfigField::Json(Value::String(self.element.clone())),
        );

        match &self.layout {
            ChartLayout::Categorical {
                xkey,
                ykeys,
                labels,
                data,
            } => {
                fields.insert(
                    "xkey".to_owned(),
                    ConfigField::Json(Value::String(xkey.clone())),
                );
                fields.insert(
                    "ykeys".to_owned(),
                    ConfigField::Json(serde_json::to_value(ykeys)?),
                );
                fields.insert(
                    "labels".to_owned(),
                    ConfigField::Json(serde_json::to_value(labels)?),
                );
                fields.insert(
                    "data".to_owned(),
                    ConfigField::Json(serde_json::to_value(data)?),
                );
            }
            ChartLayout::SingleSeries { data } => {
                fields.insert(
                    "data".to_owned(),
                    ConfigField::Json(serde_json::to_value(data)?),
                );
            }
        }

        for (key, value) in &self.options {
            let field = match value {
                Value::String(text) if is_raw_expression(value) => {
                    ConfigField::RawExpression(text.clone())
                }
                _ => ConfigField::Json(value.clone()),
            };
            fields.insert(key.clone(), field);
        }

        Ok(fields)
    }

    /// Structural JSON view. Raw expressions appear as plain strings.
    pub fn to_json_value(&self) -> ChartResult<Value> {
        let object: Map<String, Value> = self
            .fields()?
            .into_iter()
            .map(|(key, field)| {
                let value = match field {
                    ConfigField::Json(value) => value,
                    ConfigField::RawExpression(source) => Value::String(source),
                };
                (key, value)
            })
            .collect();
        Ok(Value::Object(object))
    }
}
