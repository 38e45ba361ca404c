//! Glob matching for the two exclusion policies
//!
//! Ignore patterns are matched case-sensitively against the whole relative
//! path of an entry. Skip-content patterns are matched case-insensitively
//! against the base name only. The two never share a code path.

use std::borrow::Cow;

use glob::{MatchOptions, Pattern};
use tracing::warn;

/// Skip-content defaults: binary assets and lock files whose contents are
/// not worth reproducing.
pub const DEFAULT_SKIP_CONTENT_PATTERNS: &[&str] = &[
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.svg",
    "*.webp",
    "package-lock.json",
    "composer.lock",
];

/// Wildcards may cross `/`, so `*.log` ignores log files at any depth.
const PATH_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// An ordered list of raw glob patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternList(Vec<String>);

impl PatternList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The built-in skip-content list.
    pub fn default_skip_content() -> Self {
        DEFAULT_SKIP_CONTENT_PATTERNS.iter().copied().collect()
    }

    pub fn push(&mut self, pattern: impl Into<String>) {
        self.0.push(pattern.into());
    }

    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(patterns.into_iter().map(Into::into));
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PatternList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Rewrite `[^...]` classes to the `[!...]` form `glob` negates with.
///
/// A `^` outside a class, or anywhere but first inside one, stays literal.
fn normalize_negation(raw: &str) -> Cow<'_, str> {
    if !raw.contains("[^") {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        out.push(c);
        if in_class {
            if c == ']' {
                in_class = false;
            }
            continue;
        }
        if c == '[' {
            in_class = true;
            if matches!(chars.peek(), Some(&('^' | '!'))) {
                chars.next();
                out.push('!');
            }
            // `]` directly after the opening bracket is a member, not the end
            if chars.peek() == Some(&']') {
                chars.next();
                out.push(']');
            }
        }
    }
    Cow::Owned(out)
}

/// Compile a pattern, logging and discarding it when malformed.
fn compile(raw: &str) -> Option<Pattern> {
    match Pattern::new(&normalize_negation(raw)) {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("ignoring malformed glob pattern '{}': {}", raw, e);
            None
        }
    }
}

/// Like [`compile`], without the warning. Used by the one-shot helpers,
/// which may run many times over the same list.
fn compile_quiet(raw: &str) -> Option<Pattern> {
    Pattern::new(&normalize_negation(raw)).ok()
}

/// Compiled ignore patterns.
///
/// A pattern ending in `/` only matches directories; it is compared, minus
/// the slash, against the directory's relative path.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    any: Vec<Pattern>,
    dirs_only: Vec<Pattern>,
}

impl IgnoreMatcher {
    /// Compile `patterns`, warning once about each malformed one.
    pub fn new(patterns: &PatternList) -> Self {
        Self::with_compiler(patterns, compile)
    }

    fn with_compiler(patterns: &PatternList, compile: fn(&str) -> Option<Pattern>) -> Self {
        let mut matcher = Self::default();
        for raw in patterns.as_slice() {
            match raw.strip_suffix('/') {
                Some(dir) if !dir.is_empty() => {
                    if let Some(p) = compile(dir) {
                        matcher.dirs_only.push(p);
                    }
                }
                _ => {
                    if let Some(p) = compile(raw) {
                        matcher.any.push(p);
                    }
                }
            }
        }
        matcher
    }

    /// Check a forward-slash relative path against every pattern.
    pub fn is_match(&self, relative_path: &str, is_dir: bool) -> bool {
        if self
            .any
            .iter()
            .any(|p| p.matches_with(relative_path, PATH_MATCH))
        {
            return true;
        }
        is_dir
            && self
                .dirs_only
                .iter()
                .any(|p| p.matches_with(relative_path, PATH_MATCH))
    }

    pub fn is_empty(&self) -> bool {
        self.any.is_empty() && self.dirs_only.is_empty()
    }
}

/// Compiled, lower-cased skip-content patterns.
#[derive(Debug, Clone, Default)]
pub struct SkipContentMatcher {
    patterns: Vec<Pattern>,
}

impl SkipContentMatcher {
    /// Compile `patterns`, warning once about each malformed one.
    pub fn new(patterns: &PatternList) -> Self {
        Self::with_compiler(patterns, compile)
    }

    fn with_compiler(patterns: &PatternList, compile: fn(&str) -> Option<Pattern>) -> Self {
        Self {
            patterns: patterns
                .as_slice()
                .iter()
                .filter_map(|raw| compile(&raw.to_lowercase()))
                .collect(),
        }
    }

    /// Check the lower-cased base name of `relative_path`.
    pub fn is_match(&self, relative_path: &str) -> bool {
        let name = base_name(relative_path).to_lowercase();
        self.patterns
            .iter()
            .any(|p| p.matches_with(&name, PATH_MATCH))
    }
}

/// Last `/`-separated segment of a relative path.
fn base_name(relative_path: &str) -> &str {
    relative_path
        .rsplit('/')
        .next()
        .unwrap_or(relative_path)
}

/// Whole-path, case-sensitive match of a single path.
///
/// `relative_path` is treated as a regular file: directory-only patterns
/// such as `build/` never match here. Use [`IgnoreMatcher::is_match`] with
/// `is_dir` set to test a directory, and to match many paths without
/// recompiling the list. Malformed patterns are skipped silently; they are
/// reported when an [`IgnoreMatcher`] is built.
pub fn matches_ignore(relative_path: &str, patterns: &PatternList) -> bool {
    IgnoreMatcher::with_compiler(patterns, compile_quiet).is_match(relative_path, false)
}

/// Base-name, case-insensitive match of a single path.
///
/// Malformed patterns are skipped silently; see [`SkipContentMatcher`] for
/// repeated matching.
pub fn matches_skip_content(relative_path: &str, patterns: &PatternList) -> bool {
    SkipContentMatcher::with_compiler(patterns, compile_quiet).is_match(relative_path)
}
