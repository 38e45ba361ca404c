//! Markdown document output
//!
//! The document is the rendered tree followed by a `## Full File List`
//! section with one fenced block per content file.

use std::io;
use std::path::Path;

use termcolor::WriteColor;
use tracing::warn;

use crate::language::fence_tag_for;
use crate::tree::{BuildOutput, slash_path};

use super::content::{ContentError, write_file_contents};
use super::tree::TreeFormatter;

const FENCE: &str = "```";

/// Writes the tree and the contents of every content file.
pub struct MarkdownFormatter {
    fence_tree: bool,
    use_color: bool,
}

impl MarkdownFormatter {
    pub fn new(fence_tree: bool, use_color: bool) -> Self {
        Self {
            fence_tree,
            use_color,
        }
    }

    pub fn write<W: WriteColor>(&self, build: &BuildOutput, out: &mut W) -> io::Result<()> {
        if let Some(root) = &build.root {
            if self.fence_tree {
                writeln!(out, "{}", FENCE)?;
            }
            TreeFormatter::new(self.use_color).write(root, out)?;
            if self.fence_tree {
                writeln!(out, "{}", FENCE)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "## Full File List")?;
        writeln!(out)?;

        for relative in &build.content_files {
            write_file_section(out, &build.content_base, relative)?;
        }
        Ok(())
    }
}

/// Write one `### path` heading and its fenced contents. A read failure is
/// recorded inside the fence; write failures propagate.
fn write_file_section<W: io::Write>(
    out: &mut W,
    base: &Path,
    relative: &Path,
) -> io::Result<()> {
    let path = base.join(relative);

    writeln!(out, "### {}", slash_path(relative))?;
    writeln!(out, "{}{}", FENCE, fence_tag_for(&path))?;
    match write_file_contents(&path, out) {
        Ok(()) => {}
        Err(ContentError::Read(e)) => {
            warn!("cannot read {}: {}", path.display(), e);
            writeln!(out, "Error reading file: {}", e)?;
        }
        Err(ContentError::Write(e)) => return Err(e),
    }
    writeln!(out, "{}", FENCE)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;
    use std::fs;
    use tempfile::TempDir;
    use termcolor::NoColor;

    fn render(build: &BuildOutput, fence_tree: bool) -> String {
        let mut out = NoColor::new(Vec::new());
        MarkdownFormatter::new(fence_tree, false)
            .write(build, &mut out)
            .unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn sample(dir: &TempDir) -> BuildOutput {
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.go"), "package main\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "first\nsecond").unwrap();
        BuildOutput {
            root: Some(TreeNode::dir(
                "proj",
                vec![
                    TreeNode::file("notes.txt"),
                    TreeNode::dir("src", vec![TreeNode::file("main.go")]),
                ],
            )),
            content_files: vec!["notes.txt".into(), Path::new("src").join("main.go")],
            content_base: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn test_unfenced_document() {
        let dir = TempDir::new().unwrap();
        let text = render(&sample(&dir), false);
        let expected = "\
└── proj
    ├── notes.txt
    └── src
        └── main.go

## Full File List

### notes.txt
```
first
second
```

### src/main.go
```go
package main
```

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_fenced_tree() {
        let dir = TempDir::new().unwrap();
        let text = render(&sample(&dir), true);
        assert!(text.starts_with("```\n└── proj\n"), "{}", text);
        assert!(text.contains("        └── main.go\n```\n\n## Full File List\n"));
    }

    #[test]
    fn test_unreadable_file_records_marker_and_continues() {
        let dir = TempDir::new().unwrap();
        let mut build = sample(&dir);
        build.content_files.insert(0, "gone.rs".into());

        let text = render(&build, false);
        assert!(text.contains("### gone.rs\n```rust\nError reading file: "), "{}", text);
        assert!(text.contains("### src/main.go\n```go\npackage main\n```\n"));
    }

    #[test]
    fn test_no_content_files() {
        let build = BuildOutput {
            root: Some(TreeNode::dir("empty", vec![])),
            content_files: vec![],
            content_base: ".".into(),
        };
        assert_eq!(render(&build, false), "└── empty\n\n## Full File List\n\n");
    }
}
