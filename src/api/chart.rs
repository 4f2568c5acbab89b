use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{Column, Table, TableSource};
use crate::error::{ChartError, ChartResult};

use super::chart_config::ChartConfig;
use super::id_generator::next_unique_token;
use super::layout_builder::{build_categorical_layout, build_single_series_layout};
use super::{ChartKind, ChartOptions, ChartSettings};

/// Morris chart container bound to a table.
///
/// The element id and the axis column are resolved lazily on first access
/// and memoized; both can be replaced explicitly. Every conversion derives a
/// fresh [`ChartConfig`] from the current state.
#[derive(Debug)]
pub struct Chart<T: TableSource = Table> {
    kind: ChartKind,
    table: T,
    settings: ChartSettings,
    options: ChartOptions,
    id: OnceCell<String>,
    x_axis: OnceCell<usize>,
}

impl<T: TableSource> Chart<T> {
    #[must_use]
    pub fn new(kind: ChartKind, table: T) -> Self {
        Self::with_options(kind, table, ChartOptions::new())
    }

    #[must_use]
    pub fn with_options(kind: ChartKind, table: T, options: ChartOptions) -> Self {
        Self {
            kind,
            table,
            settings: ChartSettings::default(),
            options,
            id: OnceCell::new(),
            x_axis: OnceCell::new(),
        }
    }

    /// Creates a chart from a kind name such as `"Line"`.
    ///
    /// Unknown names fail before the table is looked at.
    pub fn try_new(kind: &str, table: T, options: ChartOptions) -> ChartResult<Self> {
        let kind = kind.parse::<ChartKind>()?;
        Ok(Self::with_options(kind, table, options))
    }

    /// Replaces converter settings. An id that was already resolved keeps its prefix.
    pub fn with_settings(mut self, settings: ChartSettings) -> ChartResult<Self> {
        self.settings = settings.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn data(&self) -> &T {
        &self.table
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Stores `id_prefix + raw` as the element id and returns it. Last write wins.
    pub fn set_id(&mut self, raw: &str) -> &str {
        let id = format!("{}{raw}", self.settings.id_prefix);
        self.id = OnceCell::new();
        self.id.get_or_init(|| id)
    }

    /// Returns the element id, generating and storing a prefixed unique one
    /// on first access when none was set.
    pub fn id(&self) -> &str {
        self.id.get_or_init(|| {
            let id = format!("{}{}", self.settings.id_prefix, next_unique_token());
            trace!(%id, "generated chart element id");
            id
        })
    }

    /// Uses the column with `column_id` as the axis and returns it.
    pub fn set_x_axis(&mut self, column_id: &str) -> ChartResult<&Column> {
        let position = self
            .table
            .column_position(column_id)
            .ok_or_else(|| ChartError::ForeignColumn(column_id.to_owned()))?;
        self.x_axis = OnceCell::new();
        let position = *self.x_axis.get_or_init(|| position);
        self.column_at(position)
    }

    /// Returns the axis column, defaulting to (and memoizing) the first column.
    pub fn x_axis(&self) -> ChartResult<&Column> {
        let position = self.x_axis_position()?;
        self.column_at(position)
    }

    /// Flat-merges `patch` into the options and returns the merged map.
    pub fn set_options<I, K, V>(&mut self, patch: I) -> &ChartOptions
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.options.merge(patch)
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn convert(&self) -> ChartResult<ChartConfig> {
        let element = self.id().to_owned();
        debug!(
            kind = %self.kind,
            columns = self.table.columns().len(),
            rows = self.table.rows().len(),
            options = self.options.len(),
            "convert table to chart config"
        );

        let layout = if self.kind.is_single_series() {
            build_single_series_layout(&self.table)?
        } else {
            let position = self.x_axis_position()?;
            build_categorical_layout(&self.table, position, &self.settings.temporal_formats)?
        };

        Ok(ChartConfig {
            element,
            layout,
            options: self.options.clone(),
        })
    }

    /// Converts the table and emits the Morris constructor argument as text.
    pub fn convert_data_to_javascript(&self) -> ChartResult<String> {
        self.convert()?.to_javascript()
    }

    #[deprecated(note = "use `convert_data_to_javascript`")]
    pub fn convert_data_to_json(&self) -> ChartResult<String> {
        self.convert_data_to_javascript()
    }

    fn x_axis_position(&self) -> ChartResult<usize> {
        self.x_axis
            .get_or_try_init(|| {
                if self.table.columns().is_empty() {
                    return Err(ChartError::EmptyTable);
                }
                trace!("defaulting chart axis to first column");
                Ok(0)
            })
            .copied()
    }

    fn column_at(&self, position: usize) -> ChartResult<&Column> {
        self.table
            .columns()
            .get(position)
            .ok_or(ChartError::EmptyTable)
    }
}
