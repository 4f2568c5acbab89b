use serde::{Deserialize, Serialize};

use crate::core::TemporalFormats;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_ID_PREFIX: &str = "morris-";

/// Converter configuration.
///
/// Serializable so host applications can keep chart defaults next to the rest
/// of their configuration. Missing fields fall back to Morris defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(flatten)]
    pub temporal_formats: TemporalFormats,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            temporal_formats: TemporalFormats::default(),
        }
    }
}

impl ChartSettings {
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.temporal_formats.date_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_datetime_format(mut self, pattern: impl Into<String>) -> Self {
        self.temporal_formats.datetime_format = pattern.into();
        self
    }

    /// Checks that the prefix is usable as a DOM id start and that the
    /// temporal formats are valid chrono patterns.
    pub fn validate(self) -> ChartResult<Self> {
        if self.id_prefix.is_empty() {
            return Err(ChartError::InvalidSettings(
                "`id_prefix` must not be empty".to_owned(),
            ));
        }
        if self.id_prefix.chars().any(char::is_whitespace) {
            return Err(ChartError::InvalidSettings(
                "`id_prefix` must not contain whitespace".to_owned(),
            ));
        }
        self.temporal_formats.validate()?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidSettings(format!("failed to parse settings json: {e}"))
        })?;
        settings.validate()
    }
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_owned()
}
