//! Procedural heatmap pattern generation for themed SVG assets
//!
//! A grid of rounded rectangles with randomly chosen palette fills is rendered as an
//! SVG `<pattern>` block and substituted in place of the existing block inside each
//! target file, one file per theme variant.

#![forbid(unsafe_code)]

/// Command line driver, file injection, logging and error handling
pub mod io;
/// Pattern configuration, target descriptors and markup generation
pub mod pattern;

pub use io::error::{PatternError, Result};
