//! In-place substitution of the pattern element inside SVG files

use crate::io::error::{PatternError, Result, file_system};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;
use tracing::warn;

/// What to do when a file has no matching pattern element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPatternPolicy {
    /// Report [`PatternError::PatternNotFound`] and leave the file untouched
    #[default]
    Fail,
    /// Log a warning and leave the file untouched
    Skip,
}

/// Result of injecting into a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionOutcome {
    /// The pattern element was replaced and the file rewritten
    Replaced,
    /// No pattern element was found and the file was not written
    Unchanged,
}

/// Locates `<pattern id="...">...</pattern>` spans and swaps in generated markup
#[derive(Debug, Clone)]
pub struct PatternInjector {
    matcher: Regex,
    pattern_id: String,
    policy: MissingPatternPolicy,
}

impl PatternInjector {
    /// Build an injector for pattern elements with the given id
    ///
    /// Matching is case-sensitive, spans newlines and stops at the nearest `</pattern>`.
    /// Spaces and tabs in front of the opening tag belong to the match, since the
    /// generated block carries its own indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the matcher cannot be compiled
    pub fn new(pattern_id: &str, policy: MissingPatternPolicy) -> Result<Self> {
        let matcher = Regex::new(&format!(
            r#"(?s)[ \t]*<pattern id="{}"[^>]*>.*?</pattern>"#,
            regex::escape(pattern_id)
        ))?;

        Ok(Self {
            matcher,
            pattern_id: pattern_id.to_string(),
            policy,
        })
    }

    /// Number of pattern elements in `content` that would match
    pub fn match_count(&self, content: &str) -> usize {
        self.matcher.find_iter(content).count()
    }

    /// Replace the first matching pattern element with `pattern_text`
    ///
    /// The replacement is inserted literally. Returns `None` when nothing matches.
    pub fn replace(&self, content: &str, pattern_text: &str) -> Option<String> {
        self.matcher.is_match(content).then(|| {
            self.matcher
                .replacen(content, 1, NoExpand(pattern_text))
                .into_owned()
        })
    }

    /// Replace the pattern element inside the file at `path` and overwrite it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, or if it has no
    /// matching pattern element under [`MissingPatternPolicy::Fail`]
    pub fn inject_file(&self, path: &Path, pattern_text: &str) -> Result<InjectionOutcome> {
        let content = fs::read_to_string(path).map_err(|e| file_system(path, "read", e))?;

        let matches = self.match_count(&content);
        if matches > 1 {
            warn!(
                "Warning: {} contains {matches} <pattern id=\"{}\"> elements, only the first is replaced",
                path.display(),
                self.pattern_id
            );
        }

        match self.replace(&content, pattern_text) {
            Some(updated) => {
                fs::write(path, updated).map_err(|e| file_system(path, "write", e))?;
                Ok(InjectionOutcome::Replaced)
            }
            None => match self.policy {
                MissingPatternPolicy::Fail => Err(PatternError::PatternNotFound {
                    path: path.to_path_buf(),
                    pattern_id: self.pattern_id.clone(),
                }),
                MissingPatternPolicy::Skip => {
                    warn!(
                        "Warning: no <pattern id=\"{}\"> in {}, leaving it unchanged",
                        self.pattern_id,
                        path.display()
                    );
                    Ok(InjectionOutcome::Unchanged)
                }
            },
        }
    }
}
