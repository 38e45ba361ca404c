//! Code-fence language tags
//!
//! Maps a file extension to the language label used on the opening fence of
//! its content block. Unknown extensions get an unlabeled fence.

use std::path::Path;

/// Languages with a known fence label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Python,
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Html,
    Css,
    Scss,
    Java,
    Rust,
    Shell,
    Ruby,
    PHP,
    Yaml,
    Json,
    Markdown,
}

impl Language {
    /// Detect language from a file extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedoc::language::Language;
    ///
    /// assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
    /// assert_eq!(Language::from_extension("YML"), Some(Language::Yaml));
    /// assert_eq!(Language::from_extension("xyz"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "go" => Some(Language::Go),
            "py" => Some(Language::Python),
            "js" => Some(Language::JavaScript),
            "jsx" => Some(Language::Jsx),
            "ts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "html" => Some(Language::Html),
            "css" => Some(Language::Css),
            "scss" => Some(Language::Scss),
            "java" => Some(Language::Java),
            "rs" => Some(Language::Rust),
            "sh" => Some(Language::Shell),
            "rb" => Some(Language::Ruby),
            "php" => Some(Language::PHP),
            "yaml" | "yml" => Some(Language::Yaml),
            "json" => Some(Language::Json),
            "md" => Some(Language::Markdown),
            _ => None,
        }
    }

    /// Detect language from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Label written after the opening fence.
    pub fn fence_tag(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Jsx => "jsx",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Html => "html",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Java => "java",
            Language::Rust => "rust",
            Language::Shell => "bash",
            Language::Ruby => "ruby",
            Language::PHP => "php",
            Language::Yaml => "yaml",
            Language::Json => "json",
            Language::Markdown => "markdown",
        }
    }
}

/// Fence label for a path, empty when the extension is unknown.
pub fn fence_tag_for(path: &Path) -> &'static str {
    Language::from_path(path).map_or("", |lang| lang.fence_tag())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_tags() {
        let cases = [
            ("main.go", "go"),
            ("script.js", "javascript"),
            ("script.JS", "javascript"),
            ("styles.css", "css"),
            ("readme.md", "markdown"),
            ("data.json", "json"),
            ("deploy.sh", "bash"),
            ("config.yml", "yaml"),
            ("lib.rs", "rust"),
            ("unknownfile.xyz", ""),
            ("Makefile", ""),
        ];
        for (file, want) in cases {
            assert_eq!(fence_tag_for(Path::new(file)), want, "{}", file);
        }
    }

    #[test]
    fn test_from_path_uses_last_extension() {
        assert_eq!(
            Language::from_path(Path::new("dir.py/archive.tar.json")),
            Some(Language::Json)
        );
        assert_eq!(Language::from_path(Path::new(".bashrc")), None);
    }
}
