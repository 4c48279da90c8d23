//! Named screen regions.
//!
//! A [`Resolution`] always carries all five regions. Leaving one out of a
//! struct literal does not compile:
//!
//! ```compile_fail
//! use screen_layout::{Rectangle, Resolution};
//!
//! let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
//! let _ = Resolution { full: r, preview: r, piece: r, stats: r };
//! ```
//!
//! Runtime construction goes through [`Resolution::from_regions`] or the JSON
//! codec, both of which reject a missing region with an error.
//!
//! ```
//! use screen_layout::{Rectangle, Region, Resolution};
//!
//! let full = Rectangle::new(0.0, 0.0, 1920.0, 1080.0);
//! let cell = Rectangle::new(40.0, 40.0, 200.0, 200.0);
//! let layout = Resolution::new(full, cell, cell, cell, cell);
//!
//! assert_eq!(layout.get(Region::Full).width, 1920.0);
//! ```

mod codec;
mod core;

pub use self::core::{Region, Resolution};
