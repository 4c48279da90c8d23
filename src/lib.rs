//! Screen region contract for a falling-block game UI.
//!
//! An external layout engine produces a [`Resolution`]: five named
//! [`Rectangle`]s (`full`, `preview`, `piece`, `stats`, `set`). Renderers read
//! the rectangles to position their widgets. This crate computes no layout and
//! validates no geometry; coordinates are whatever the producer emits.

pub mod error;
pub mod geometry;
pub mod logging;
pub mod resolution;

pub use error::{Result, ShapeError};
pub use geometry::Rectangle;
pub use logging::{
    JsonLineSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use resolution::{Region, Resolution};
