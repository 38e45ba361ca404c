//! In-memory tree produced by a walk

use serde::Serialize;

/// One retained filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
    },
    Dir {
        name: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::File { name: name.into() }
    }

    /// Create a directory node. Children are sorted by name, byte-wise.
    pub fn dir(name: impl Into<String>, mut children: Vec<TreeNode>) -> Self {
        children.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
        TreeNode::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Child nodes (always empty for files).
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Count files in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            TreeNode::File { .. } => 1,
            TreeNode::Dir { children, .. } => children.iter().map(TreeNode::file_count).sum(),
        }
    }

    /// Count directories in this subtree, including this one.
    pub fn dir_count(&self) -> usize {
        match self {
            TreeNode::File { .. } => 0,
            TreeNode::Dir { children, .. } => {
                1 + children.iter().map(TreeNode::dir_count).sum::<usize>()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_sorts_children_bytewise() {
        let node = TreeNode::dir(
            "root",
            vec![
                TreeNode::file("b.txt"),
                TreeNode::file("Z.txt"),
                TreeNode::dir("a", vec![]),
                TreeNode::file("_x"),
            ],
        );
        let names: Vec<_> = node.children().iter().map(TreeNode::name).collect();
        // uppercase sorts before underscore, which sorts before lowercase
        assert_eq!(names, ["Z.txt", "_x", "a", "b.txt"]);
    }

    #[test]
    fn test_counts() {
        let node = TreeNode::dir(
            "root",
            vec![
                TreeNode::file("a"),
                TreeNode::dir("sub", vec![TreeNode::file("b"), TreeNode::file("c")]),
                TreeNode::dir("empty", vec![]),
            ],
        );
        assert_eq!(node.file_count(), 3);
        assert_eq!(node.dir_count(), 3);
        assert!(TreeNode::file("x").children().is_empty());
    }

    #[test]
    fn test_serialize_shape() {
        let node = TreeNode::dir("root", vec![TreeNode::file("a.rs")]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "dir");
        assert_eq!(json["name"], "root");
        assert_eq!(json["children"][0]["type"], "file");
        assert_eq!(json["children"][0]["name"], "a.rs");
    }
}
