use crate::error::ChartResult;

use super::chart_config::{ChartConfig, ConfigField};

impl ChartConfig {
    /// Emits the config as compact JavaScript object text.
    ///
    /// Output is valid JSON unless an option holds a raw expression, which is
    /// written verbatim. Fields are emitted one at a time so raw text never
    /// passes through a string substitution.
    pub fn to_javascript(&self) -> ChartResult<String> {
        let fields = self.fields()?;
        let mut out = String::from("{");
        for (index, (key, field)) in fields.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::to_string(key)?);
            out.push(':');
            match field {
                ConfigField::Json(value) => out.push_str(&serde_json::to_string(value)?),
                ConfigField::RawExpression(source) => out.push_str(source),
            }
        }
        out.push('}');
        Ok(out)
    }
}
