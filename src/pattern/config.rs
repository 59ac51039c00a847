//! Immutable pattern configuration passed to the generator and injector

use crate::io::configuration::{
    CORNER_RADIUS, GRID_SIZE, PALETTE, PATTERN_ID, PATTERN_SIZE, RECT_SIZE, SPACING, STROKE_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};

// Characters that would break out of the quoted `id` attribute
const MARKUP_CHARS: [char; 4] = ['"', '<', '>', '&'];

/// Geometry and palette of a generated pattern
#[derive(Debug, Clone, PartialEq)]
pub struct PatternConfig {
    /// `id` attribute of the emitted `<pattern>` element
    pub pattern_id: String,
    /// Number of rows and columns
    pub grid_size: usize,
    /// Width and height of the pattern tile
    pub pattern_size: u32,
    /// Width and height of each rectangle
    pub rect_size: f64,
    /// Distance between adjacent rectangle origins
    pub spacing: f64,
    /// Stroke width around each rectangle
    pub stroke_width: f64,
    /// Corner radius of each rectangle
    pub corner_radius: f64,
    /// Candidate fill colors
    pub palette: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            pattern_id: PATTERN_ID.to_string(),
            grid_size: GRID_SIZE,
            pattern_size: PATTERN_SIZE,
            rect_size: RECT_SIZE,
            spacing: SPACING,
            stroke_width: STROKE_WIDTH,
            corner_radius: CORNER_RADIUS,
            palette: PALETTE.iter().map(ToString::to_string).collect(),
        }
    }
}

impl PatternConfig {
    /// Total number of rectangles in the grid
    pub const fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Check that the configuration can produce a pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern id is empty or contains markup characters, the
    /// tile or grid is empty, a palette color is blank or quoted, or any length is
    /// negative or non-finite
    pub fn validate(&self) -> Result<()> {
        if self.pattern_id.is_empty() {
            return Err(invalid_parameter(
                "pattern_id",
                &self.pattern_id,
                &"must not be empty",
            ));
        }
        if let Some(found) = self.pattern_id.chars().find(|c| MARKUP_CHARS.contains(c)) {
            return Err(invalid_parameter(
                "pattern_id",
                &self.pattern_id,
                &format!("must not contain '{found}'"),
            ));
        }
        if self.pattern_size == 0 {
            return Err(invalid_parameter(
                "pattern_size",
                &self.pattern_size,
                &"must be at least 1",
            ));
        }
        if self.grid_size == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &"must be at least 1",
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"must contain at least one color",
            ));
        }
        for color in &self.palette {
            if color.trim().is_empty() || color.contains('"') {
                return Err(invalid_parameter(
                    "palette",
                    color,
                    &"colors must be non-blank and free of quotes",
                ));
            }
        }

        let lengths = [
            ("rect_size", self.rect_size),
            ("spacing", self.spacing),
            ("stroke_width", self.stroke_width),
            ("corner_radius", self.corner_radius),
        ];
        for (parameter, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a finite non-negative number",
                ));
            }
        }

        Ok(())
    }
}
