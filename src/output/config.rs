//! Output configuration types

use std::path::Path;

/// Shape of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The tree only.
    Text,
    /// The tree followed by the full file list with contents.
    Markdown {
        /// Wrap the tree in a bare code fence.
        fence_tree: bool,
    },
    /// Tree and file contents as a JSON object.
    Json,
}

impl OutputFormat {
    /// Pick the format for a destination.
    ///
    /// Stdout gets an unfenced tree plus contents, a `.md` file gets a fenced
    /// tree plus contents, and any other file gets the tree alone.
    pub fn for_destination(output: Option<&Path>, json: bool) -> Self {
        if json {
            return OutputFormat::Json;
        }
        match output {
            None => OutputFormat::Markdown { fence_tree: false },
            Some(path) if is_markdown_path(path) => OutputFormat::Markdown { fence_tree: true },
            Some(_) => OutputFormat::Text,
        }
    }
}

fn is_markdown_path(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".md")
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Color directory names in the tree.
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown { fence_tree: false },
            use_color: false,
        }
    }
}
