//! JSON output formatting

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::error::TreedocError;
use crate::language::Language;
use crate::tree::{BuildOutput, TreeNode, slash_path};

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    pub root: String,
    pub tree: Option<&'a TreeNode>,
    pub files: Vec<JsonFile>,
}

/// One content file with its text, or the error that prevented reading it.
#[derive(Debug, Serialize)]
pub struct JsonFile {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonFile {
    fn read(base: &Path, relative: &Path) -> Self {
        let path = base.join(relative);
        let (content, error) = match fs::read(&path) {
            Ok(bytes) => (Some(String::from_utf8_lossy(&bytes).into_owned()), None),
            Err(e) => {
                warn!("cannot read {}: {}", path.display(), e);
                (None, Some(e.to_string()))
            }
        };
        Self {
            path: slash_path(relative),
            language: Language::from_path(&path).map(|l| l.fence_tag()),
            content,
            error,
        }
    }
}

impl<'a> JsonDocument<'a> {
    pub fn from_build(root: &Path, build: &'a BuildOutput) -> Self {
        Self {
            root: root.display().to_string(),
            tree: build.root.as_ref(),
            files: build
                .content_files
                .iter()
                .map(|relative| JsonFile::read(&build.content_base, relative))
                .collect(),
        }
    }
}

/// Write the build as pretty-printed JSON.
pub fn write_json<W: Write>(
    root: &Path,
    build: &BuildOutput,
    out: &mut W,
) -> Result<(), TreedocError> {
    let document = JsonDocument::from_build(root, build);
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}
