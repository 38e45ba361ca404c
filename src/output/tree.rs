//! ASCII tree rendering
//!
//! The root is drawn as a last sibling, so every tree starts with `└── `
//! and all descendants are indented by at least one unit.

use std::convert::Infallible;
use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::TreeNode;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// Prefix for the children of a node drawn with `prefix`.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, SPACE)
    } else {
        format!("{}{}", prefix, VERTICAL)
    }
}

/// Visit every node in preorder with the prefix and connector that draw it.
fn for_each_line<E, F>(root: &TreeNode, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&str, &str, &TreeNode) -> Result<(), E>,
{
    visit_node(root, "", true, visit)
}

fn visit_node<E, F>(
    node: &TreeNode,
    prefix: &str,
    is_last: bool,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&str, &str, &TreeNode) -> Result<(), E>,
{
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    visit(prefix, connector, node)?;

    let child_prefix = continuation_prefix(prefix, is_last);
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        visit_node(child, &child_prefix, i + 1 == count, visit)?;
    }
    Ok(())
}

/// Render `root` as one line per node, in preorder.
///
/// # Examples
///
/// ```
/// use treedoc::output::render_tree_lines;
/// use treedoc::tree::TreeNode;
///
/// let root = TreeNode::dir("project", vec![TreeNode::file("main.rs")]);
/// assert_eq!(render_tree_lines(&root), ["└── project", "    └── main.rs"]);
/// ```
pub fn render_tree_lines(root: &TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    let Ok(()) = for_each_line(root, &mut |prefix, connector, node| {
        lines.push(format!("{}{}{}", prefix, connector, node.name()));
        Ok::<(), Infallible>(())
    });
    lines
}

/// Writes a rendered tree, optionally coloring directory names.
pub struct TreeFormatter {
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn write<W: WriteColor>(&self, root: &TreeNode, out: &mut W) -> io::Result<()> {
        for_each_line(root, &mut |prefix, connector, node| {
            write!(out, "{}{}", prefix, connector)?;
            if self.use_color && node.is_dir() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", node.name())?;
                out.reset()?;
            } else {
                write!(out, "{}", node.name())?;
            }
            writeln!(out)
        })
    }
}
