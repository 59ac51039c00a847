//! Tests for command-line parsing and the per-target update driver

#[cfg(test)]
mod tests {
    use clap::Parser;
    use heatmap_pattern::PatternError;
    use heatmap_pattern::io::cli::{Cli, ThemeUpdater};
    use heatmap_pattern::io::injection::{InjectionOutcome, MissingPatternPolicy};
    use heatmap_pattern::pattern::ThemeTarget;
    use heatmap_pattern::pattern::target::default_targets;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PLACEHOLDER: &str = "<svg>\n<pattern id=\"heatmap\" x=\"0\"><rect/></pattern>\n</svg>\n";

    fn target_arg(path: &Path, style: &str) -> String {
        format!("{}={style}", path.display())
    }

    // Tests CLI parsing with no arguments falls back to the theme pair
    // Verified by returning an empty target list
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert!(cli.targets.is_empty());
        assert_eq!(cli.resolved_targets(), default_targets());
        assert_eq!(cli.seed, None);
        assert_eq!(cli.missing_policy(), MissingPatternPolicy::Fail);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "a.svg=#fff",
            "b.svg=#000:background",
            "--seed",
            "123",
            "--skip-missing",
            "--quiet",
        ]);

        assert_eq!(
            cli.resolved_targets(),
            vec![
                ThemeTarget::new("a.svg", "#fff", false),
                ThemeTarget::new("b.svg", "#000", true),
            ]
        );
        assert_eq!(cli.seed, Some(123));
        assert_eq!(cli.missing_policy(), MissingPatternPolicy::Skip);
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_rejects_malformed_target() {
        assert!(Cli::try_parse_from(["program", "missing-color.svg"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.svg=#fff:glow"]).is_err());
    }

    // Tests every target is rewritten with its own stroke and background
    // Verified by reusing the first target's stroke for all files
    #[test]
    fn test_updater_rewrites_each_target() {
        let dir = TempDir::new().unwrap();
        let dark = dir.path().join("dark.svg");
        let light = dir.path().join("light.svg");
        fs::write(&dark, PLACEHOLDER).unwrap();
        fs::write(&light, PLACEHOLDER).unwrap();

        let cli = Cli::parse_from([
            "program".to_string(),
            target_arg(&dark, "#fff"),
            target_arg(&light, "#000:background"),
            "--seed".to_string(),
            "5".to_string(),
        ]);
        let mut updater = ThemeUpdater::new(&cli).unwrap();
        let outcomes = updater.run().unwrap();

        assert_eq!(outcomes, vec![InjectionOutcome::Replaced; 2]);
        assert_eq!(updater.seed(), 5);
        assert_eq!(updater.targets().len(), 2);

        let dark_svg = fs::read_to_string(&dark).unwrap();
        let light_svg = fs::read_to_string(&light).unwrap();
        assert_eq!(dark_svg.matches(r##"stroke="#fff""##).count(), 289);
        assert!(!dark_svg.contains("Background for gaps"));
        assert_eq!(light_svg.matches(r##"stroke="#000""##).count(), 289);
        assert!(light_svg.contains(r##"<rect width="24" height="24" fill="#000" />"##));
        assert!(dark_svg.starts_with("<svg>\n"));
        assert!(light_svg.ends_with("</pattern>\n</svg>\n"));
    }

    // Tests a seeded run is reproducible across updaters
    // Verified by ignoring the seed argument
    #[test]
    fn test_updater_seed_reproducible() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tile.svg");
        let args = [
            "program".to_string(),
            target_arg(&path, "#fff"),
            "--seed".to_string(),
            "77".to_string(),
        ];

        fs::write(&path, PLACEHOLDER).unwrap();
        ThemeUpdater::new(&Cli::parse_from(&args)).unwrap().run().unwrap();
        let first = fs::read_to_string(&path).unwrap();

        fs::write(&path, PLACEHOLDER).unwrap();
        ThemeUpdater::new(&Cli::parse_from(&args)).unwrap().run().unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    // Tests a failing target halts the run without touching later files
    // Verified by continuing past errors
    #[test]
    fn test_updater_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.svg");
        let missing = dir.path().join("missing.svg");
        let last = dir.path().join("last.svg");
        fs::write(&first, PLACEHOLDER).unwrap();
        fs::write(&last, PLACEHOLDER).unwrap();

        let cli = Cli::parse_from([
            "program".to_string(),
            target_arg(&first, "#fff"),
            target_arg(&missing, "#fff"),
            target_arg(&last, "#fff"),
        ]);
        let result = ThemeUpdater::new(&cli).unwrap().run();

        assert!(matches!(result, Err(PatternError::FileSystem { .. })));
        assert_ne!(fs::read_to_string(&first).unwrap(), PLACEHOLDER);
        assert_eq!(fs::read_to_string(&last).unwrap(), PLACEHOLDER);
    }

    #[test]
    fn test_updater_skip_missing_continues() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain.svg");
        let tile = dir.path().join("tile.svg");
        fs::write(&plain, "<svg/>").unwrap();
        fs::write(&tile, PLACEHOLDER).unwrap();

        let cli = Cli::parse_from([
            "program".to_string(),
            target_arg(&plain, "#fff"),
            target_arg(&tile, "#fff"),
            "--skip-missing".to_string(),
        ]);
        let outcomes = ThemeUpdater::new(&cli).unwrap().run().unwrap();

        assert_eq!(
            outcomes,
            vec![InjectionOutcome::Unchanged, InjectionOutcome::Replaced]
        );
        assert_eq!(fs::read_to_string(&plain).unwrap(), "<svg/>");
    }
}
