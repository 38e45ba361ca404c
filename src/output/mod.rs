//! Document output
//!
//! - `tree` - ASCII tree rendering
//! - `markdown` - tree plus the full file list
//! - `json` - tree and file contents as JSON
//! - `content` - line-by-line copying of file contents
//! - `config` - output configuration types

mod config;
mod content;
mod json;
mod markdown;
mod tree;

use std::path::Path;

use termcolor::WriteColor;

use crate::error::TreedocError;
use crate::tree::BuildOutput;

pub use config::{OutputConfig, OutputFormat};
pub use content::{ContentError, copy_lines, write_file_contents};
pub use json::{JsonDocument, JsonFile, write_json};
pub use markdown::MarkdownFormatter;
pub use tree::{TreeFormatter, continuation_prefix, render_tree_lines};

/// Write `build` to `out` in the configured format.
pub fn write_output<W: WriteColor>(
    root: &Path,
    build: &BuildOutput,
    config: &OutputConfig,
    out: &mut W,
) -> Result<(), TreedocError> {
    match config.format {
        OutputFormat::Text => {
            if let Some(node) = &build.root {
                TreeFormatter::new(config.use_color).write(node, out)?;
            }
        }
        OutputFormat::Markdown { fence_tree } => {
            MarkdownFormatter::new(fence_tree, config.use_color).write(build, out)?;
        }
        OutputFormat::Json => write_json(root, build, out)?,
    }
    out.flush()?;
    Ok(())
}
