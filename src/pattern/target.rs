//! Target file descriptors pairing an SVG asset with its gap color

use crate::io::configuration::{DARK_GAP_COLOR, DARK_THEME_PATH, LIGHT_GAP_COLOR, LIGHT_THEME_PATH};
use crate::io::error::{PatternError, invalid_target};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Flag that requests a full-tile background rectangle
pub const BACKGROUND_FLAG: &str = "background";

/// SVG file to update and how its pattern is stroked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTarget {
    /// File containing the pattern element to replace
    pub path: PathBuf,
    /// Stroke color drawn in the gaps between rectangles
    pub stroke_color: String,
    /// Fill the tile with the stroke color first so gaps stay visible
    pub include_background: bool,
}

impl ThemeTarget {
    /// Create a target descriptor
    pub fn new(
        path: impl Into<PathBuf>,
        stroke_color: impl Into<String>,
        include_background: bool,
    ) -> Self {
        Self {
            path: path.into(),
            stroke_color: stroke_color.into(),
            include_background,
        }
    }
}

/// Dark and light theme assets, white gaps on dark and black gaps on light
pub fn default_targets() -> Vec<ThemeTarget> {
    vec![
        ThemeTarget::new(DARK_THEME_PATH, DARK_GAP_COLOR, false),
        ThemeTarget::new(LIGHT_THEME_PATH, LIGHT_GAP_COLOR, true),
    ]
}

impl FromStr for ThemeTarget {
    type Err = PatternError;

    /// Parse `PATH=COLOR` or `PATH=COLOR:background`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, style) = s
            .rsplit_once('=')
            .ok_or_else(|| invalid_target(s, &"expected PATH=COLOR"))?;

        if path.is_empty() {
            return Err(invalid_target(s, &"path is empty"));
        }

        let (color, include_background) = match style.split_once(':') {
            Some((color, BACKGROUND_FLAG)) => (color, true),
            Some((_, flag)) => {
                return Err(invalid_target(
                    s,
                    &format!("unknown flag '{flag}', expected '{BACKGROUND_FLAG}'"),
                ));
            }
            None => (style, false),
        };

        if color.is_empty() {
            return Err(invalid_target(s, &"stroke color is empty"));
        }
        if color.contains('"') {
            return Err(invalid_target(s, &"stroke color must not contain quotes"));
        }

        Ok(Self::new(path, color, include_background))
    }
}

impl fmt::Display for ThemeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.path.display(), self.stroke_color)?;
        if self.include_background {
            write!(f, ":{BACKGROUND_FLAG}")?;
        }
        Ok(())
    }
}
