use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Morris chart constructors supported by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Area,
    Bar,
    Donut,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [Self::Area, Self::Bar, Self::Donut, Self::Line];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::Bar => "Bar",
            Self::Donut => "Donut",
            Self::Line => "Line",
        }
    }

    /// Donut charts use the label/value layout instead of xkey/ykeys.
    #[must_use]
    pub fn is_single_series(self) -> bool {
        matches!(self, Self::Donut)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == input)
            .ok_or_else(|| ChartError::InvalidChartKind(input.to_owned()))
    }
}

impl TryFrom<&str> for ChartKind {
    type Error = ChartError;

    fn try_from(input: &str) -> ChartResult<Self> {
        input.parse()
    }
}
