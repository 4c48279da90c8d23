//! Plain key-value encoding for [`Resolution`], backed by `serde_json`.

use serde_json::Value;

use super::core::Resolution;
use crate::error::{Result, ShapeError};

impl Resolution {
    /// Decode from a JSON object keyed by region name. Missing, unknown, or
    /// non-numeric entries are errors; nothing is defaulted.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encode as a JSON object. NaN and infinities have no JSON form, so any
    /// non-finite coordinate is an error rather than a lossy `null`.
    pub fn to_json(&self) -> Result<String> {
        self.ensure_finite()?;
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        self.ensure_finite()?;
        Ok(serde_json::to_value(self)?)
    }

    fn ensure_finite(&self) -> Result<()> {
        for (region, rect) in self.regions() {
            if let Some(field) = rect.non_finite_field() {
                return Err(ShapeError::NonFinite { region, field });
            }
        }
        Ok(())
    }
}
