//! Markup generation for the heatmap `<pattern>` element
//!
//! Every cell of the grid becomes one rounded `<rect>` whose fill is drawn uniformly
//! from the palette. The random source is supplied by the caller so a seeded
//! generator reproduces the same tile.

use crate::io::configuration::{ELEMENT_INDENT, PATTERN_INDENT};
use crate::io::error::{Result, invalid_parameter};
use crate::pattern::config::PatternConfig;
use crate::pattern::format::svg_number;
use crate::pattern::target::ThemeTarget;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Builds `<pattern>` markup from a validated configuration
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    config: PatternConfig,
}

impl PatternGenerator {
    /// Create a generator for the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: PatternConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this generator renders
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Render the complete pattern element for one target
    ///
    /// Lines are joined with `\n` and the result has no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if no fill color can be drawn from the palette
    pub fn generate<R: Rng + ?Sized>(&self, target: &ThemeTarget, rng: &mut R) -> Result<String> {
        let config = &self.config;
        let stroke = &target.stroke_color;
        let mut lines = Vec::with_capacity(config.cell_count() + 2 * config.grid_size + 5);

        lines.push(self.opening_tag());

        if target.include_background {
            lines.push(format!("{ELEMENT_INDENT}<!-- Background for gaps -->"));
            lines.push(format!(
                "{ELEMENT_INDENT}<rect width=\"{size}\" height=\"{size}\" fill=\"{stroke}\" />",
                size = config.pattern_size
            ));
            lines.push(String::new());
        }

        for row in 0..config.grid_size {
            lines.push(format!("{ELEMENT_INDENT}<!-- Row {} -->", row + 1));
            let y = svg_number(row as f64 * config.spacing);

            for col in 0..config.grid_size {
                let x = svg_number(col as f64 * config.spacing);
                let fill = config.palette.choose(rng).ok_or_else(|| {
                    invalid_parameter("palette", &"[]", &"must contain at least one color")
                })?;
                lines.push(self.cell(&x, &y, fill, stroke));
            }

            lines.push(String::new());
        }

        lines.push(format!("{PATTERN_INDENT}</pattern>"));

        Ok(lines.join("\n"))
    }

    fn opening_tag(&self) -> String {
        let size = self.config.pattern_size;
        format!(
            "{PATTERN_INDENT}<pattern id=\"{}\" x=\"0\" y=\"0\" width=\"{size}\" height=\"{size}\" patternUnits=\"userSpaceOnUse\">",
            self.config.pattern_id
        )
    }

    fn cell(&self, x: &str, y: &str, fill: &str, stroke: &str) -> String {
        let rect = svg_number(self.config.rect_size);
        format!(
            "{ELEMENT_INDENT}<rect width=\"{rect}\" height=\"{rect}\" x=\"{x}\" y=\"{y}\" fill=\"{fill}\" rx=\"{radius}\" stroke=\"{stroke}\" stroke-width=\"{width}\" />",
            radius = svg_number(self.config.corner_radius),
            width = svg_number(self.config.stroke_width),
        )
    }
}
