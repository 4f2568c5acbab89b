mod chart;
mod chart_config;
mod chart_kind;
mod chart_settings;
mod id_generator;
mod javascript;
mod layout_builder;
mod options;

pub use chart::Chart;
pub use chart_config::{
    COL_LABEL, COL_VALUE, ChartConfig, ChartLayout, ConfigField, DonutSegment, RowObject,
};
pub use chart_kind::ChartKind;
pub use chart_settings::{ChartSettings, DEFAULT_ID_PREFIX};
pub use id_generator::next_unique_token;
pub use options::{ChartOptions, RAW_EXPRESSION_PREFIX, is_raw_expression};
