//! Command-line interface and the sequential per-target update driver

use crate::io::error::Result;
use crate::io::injection::{InjectionOutcome, MissingPatternPolicy, PatternInjector};
use crate::pattern::config::PatternConfig;
use crate::pattern::format::svg_number;
use crate::pattern::generator::PatternGenerator;
use crate::pattern::target::{ThemeTarget, default_targets};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "heatmap-pattern")]
#[command(
    author,
    version,
    about = "Regenerate the heatmap tile pattern inside themed SVG assets"
)]
/// Command-line arguments for the pattern update tool
pub struct Cli {
    /// Files to update as PATH=COLOR or PATH=COLOR:background
    /// (defaults to the dark and light theme assets)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<ThemeTarget>,

    /// Random seed for reproducible colors
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Leave files without a heatmap pattern untouched instead of failing
    #[arg(long)]
    pub skip_missing: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Targets given on the command line, or the default theme pair
    pub fn resolved_targets(&self) -> Vec<ThemeTarget> {
        if self.targets.is_empty() {
            default_targets()
        } else {
            self.targets.clone()
        }
    }

    /// Policy applied to files without a matching pattern element
    pub const fn missing_policy(&self) -> MissingPatternPolicy {
        if self.skip_missing {
            MissingPatternPolicy::Skip
        } else {
            MissingPatternPolicy::Fail
        }
    }
}

/// Generates a fresh pattern for each target and writes it into the file
pub struct ThemeUpdater {
    targets: Vec<ThemeTarget>,
    generator: PatternGenerator,
    injector: PatternInjector,
    rng: StdRng,
    seed: u64,
}

impl ThemeUpdater {
    /// Create an updater with the built-in pattern configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern matcher cannot be built
    pub fn new(cli: &Cli) -> Result<Self> {
        Self::with_config(cli, PatternConfig::default())
    }

    /// Create an updater that renders the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the matcher cannot be built
    pub fn with_config(cli: &Cli, config: PatternConfig) -> Result<Self> {
        let injector = PatternInjector::new(&config.pattern_id, cli.missing_policy())?;
        let generator = PatternGenerator::new(config)?;
        let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
        debug!("Using seed {seed}");

        Ok(Self {
            targets: cli.resolved_targets(),
            generator,
            injector,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Seed driving the fill colors of this run
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Files this updater will touch, in order
    pub fn targets(&self) -> &[ThemeTarget] {
        &self.targets
    }

    /// Update every target in order, stopping at the first failure
    ///
    /// Files already written before a failure are not restored.
    ///
    /// # Errors
    ///
    /// Returns the first read, write or missing-pattern error encountered
    pub fn run(&mut self) -> Result<Vec<InjectionOutcome>> {
        let mut outcomes = Vec::with_capacity(self.targets.len());
        let grid = self.generator.config().grid_size;

        for target in &self.targets {
            let pattern = self.generator.generate(target, &mut self.rng)?;
            let outcome = self.injector.inject_file(&target.path, &pattern)?;

            if outcome == InjectionOutcome::Replaced {
                info!(
                    "✓ Updated {} with {grid}x{grid} heatmap pattern",
                    target.path.display()
                );
            }
            outcomes.push(outcome);
        }

        self.log_configuration();
        Ok(outcomes)
    }

    fn log_configuration(&self) {
        let config = self.generator.config();
        info!("Configuration:");
        info!(
            "  - Pattern size: {size}x{size}",
            size = config.pattern_size
        );
        info!("  - Rectangle size: {}", svg_number(config.rect_size));
        info!("  - Spacing: {}", svg_number(config.spacing));
        info!("  - Stroke width: {}", svg_number(config.stroke_width));
    }
}
