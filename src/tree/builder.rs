//! TreeBuilder - walks a directory and builds the filtered tree in memory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::WalkError;
use crate::patterns::{IgnoreMatcher, SkipContentMatcher};

use super::config::BuildConfig;
use super::node::TreeNode;

/// Result of a complete walk.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Root of the tree, or `None` when the root itself was pruned
    /// (it is the excluded output file).
    pub root: Option<TreeNode>,
    /// Relative paths of files whose contents should be emitted, sorted by
    /// their encoded bytes. Kept as native paths so names that are not valid
    /// UTF-8 still resolve against `content_base`.
    pub content_files: Vec<PathBuf>,
    /// Directory that `content_files` are relative to.
    pub content_base: PathBuf,
}

/// A node plus the content paths discovered beneath it.
struct Walked {
    node: TreeNode,
    content_files: Vec<PathBuf>,
}

/// Builds a [`TreeNode`] tree from a directory, applying the hidden-entry
/// rule, ignore patterns and skip-content classification.
///
/// Symlinks are followed. Every entry is canonicalized first and a canonical
/// path is only visited once per walk, which breaks symlink cycles.
pub struct TreeBuilder {
    config: BuildConfig,
    ignore: IgnoreMatcher,
    skip_content: SkipContentMatcher,
}

impl TreeBuilder {
    pub fn new(config: BuildConfig) -> Self {
        let ignore = IgnoreMatcher::new(&config.ignore_patterns);
        let skip_content = SkipContentMatcher::new(&config.skip_content_patterns);
        Self {
            config,
            ignore,
            skip_content,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Walk `root` and return the tree with its sorted content list.
    ///
    /// Any resolution, stat or enumeration failure aborts the walk.
    pub fn build(&self, root: &Path) -> Result<BuildOutput, WalkError> {
        let mut visited = HashSet::new();
        let walked = self.build_node(root, root, &mut visited)?;

        let content_base = match &walked {
            Some(w) if !w.node.is_dir() => root
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            _ => root.to_path_buf(),
        };

        let (root, mut content_files) = match walked {
            Some(w) => (Some(w.node), w.content_files),
            None => (None, Vec::new()),
        };
        content_files.sort_by(|a, b| {
            a.as_os_str()
                .as_encoded_bytes()
                .cmp(b.as_os_str().as_encoded_bytes())
        });

        debug!(
            "walk finished: {} canonical paths visited, {} content files",
            visited.len(),
            content_files.len()
        );

        Ok(BuildOutput {
            root,
            content_files,
            content_base,
        })
    }

    fn build_node(
        &self,
        scan_root: &Path,
        path: &Path,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<Option<Walked>, WalkError> {
        let canonical = fs::canonicalize(path).map_err(|source| WalkError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;

        if self.config.exclude_path.as_deref() == Some(canonical.as_path()) {
            debug!("excluding output file {}", path.display());
            return Ok(None);
        }
        if !visited.insert(canonical.clone()) {
            debug!(
                "skipping {}: {} already visited",
                path.display(),
                canonical.display()
            );
            return Ok(None);
        }

        let metadata = fs::metadata(path).map_err(|source| WalkError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        let name = entry_name(path, &canonical);

        if !metadata.is_dir() {
            let relative = relative_path(scan_root, path)?;
            let content_files = if self.skip_content.is_match(&slash_path(&relative)) {
                trace!("skipping content of {}", relative.display());
                Vec::new()
            } else {
                vec![relative]
            };
            return Ok(Some(Walked {
                node: TreeNode::file(name),
                content_files,
            }));
        }

        let mut entries = fs::read_dir(path)
            .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
            .map_err(|source| WalkError::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
        // Visit in name order so the first path to reach a shared target wins
        // deterministically.
        entries.sort_by_key(|e| e.file_name());

        let mut children = Vec::new();
        let mut content_files = Vec::new();

        for entry in entries {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with('.') {
                trace!("skipping hidden entry {}", file_name);
                continue;
            }

            let child_path = path.join(entry.file_name());
            let relative = slash_path(&relative_path(scan_root, &child_path)?);
            if self.ignore.is_match(&relative, child_path.is_dir()) {
                debug!("ignoring {}", relative);
                continue;
            }

            if let Some(walked) = self.build_node(scan_root, &child_path, visited)? {
                children.push(walked.node);
                content_files.extend(walked.content_files);
            }
        }

        Ok(Some(Walked {
            node: TreeNode::dir(name, children),
            content_files,
        }))
    }
}

/// Base name of an entry, falling back to the canonical path for roots
/// such as `/` that have none.
fn entry_name(path: &Path, canonical: &Path) -> String {
    path.file_name()
        .or_else(|| canonical.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| canonical.display().to_string())
}

/// Path of `path` relative to `scan_root`.
///
/// For a scan root that is itself a file, this is the file's name.
fn relative_path(scan_root: &Path, path: &Path) -> Result<PathBuf, WalkError> {
    let relative = path
        .strip_prefix(scan_root)
        .map_err(|_| WalkError::OutsideRoot {
            path: path.to_path_buf(),
            root: scan_root.to_path_buf(),
        })?;

    if relative.as_os_str().is_empty() {
        return Ok(path.file_name().map(PathBuf::from).unwrap_or_default());
    }
    Ok(relative.to_path_buf())
}

/// Forward-slash form of a relative path, used for pattern matching and
/// display. Components that are not valid UTF-8 are converted lossily.
pub fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
