use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::logging::LogFields;

/// Axis-aligned region: origin offset plus extent.
///
/// Units and origin convention belong to whichever layout engine produced the
/// value. Nothing here checks that `width`/`height` are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Name of the first coordinate that is NaN or infinite, if any.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        self.named()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
    }

    /// Log fields; NaN and infinities are kept as strings instead of collapsing to `null`.
    pub fn as_fields(&self) -> LogFields {
        self.named()
            .into_iter()
            .map(|(name, value)| (name.to_string(), coordinate(value)))
            .collect()
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
        ]
    }
}

fn coordinate(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else {
        Value::String(value.to_string())
    }
}
