//! Configuration types for the tree builder

use std::path::PathBuf;

use crate::patterns::PatternList;

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Whole-path, case-sensitive patterns; matches are dropped from the tree.
    pub ignore_patterns: PatternList,
    /// Base-name, case-insensitive patterns; matches stay in the tree but
    /// their contents are not collected.
    pub skip_content_patterns: PatternList,
    /// Canonical path of a file that must never appear in its own scan
    /// (usually the output document).
    pub exclude_path: Option<PathBuf>,
}

impl BuildConfig {
    pub fn with_ignore_patterns(mut self, patterns: PatternList) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_skip_content_patterns(mut self, patterns: PatternList) -> Self {
        self.skip_content_patterns = patterns;
        self
    }

    pub fn with_exclude_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude_path = Some(path.into());
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: PatternList::new(),
            skip_content_patterns: PatternList::default_skip_content(),
            exclude_path: None,
        }
    }
}
