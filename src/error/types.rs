use thiserror::Error;

use crate::resolution::Region;

/// Unified result type for the screen layout crate.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Errors surfaced while building or decoding layout values.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("region `{0}` is missing")]
    MissingRegion(Region),
    #[error("region `{0}` supplied more than once")]
    DuplicateRegion(Region),
    #[error("unknown region `{0}`")]
    UnknownRegion(String),
    #[error("region `{region}` has non-finite `{field}`")]
    NonFinite { region: Region, field: &'static str },
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
