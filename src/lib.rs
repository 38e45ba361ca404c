//! treedoc - Render a directory tree and its file contents as one document

pub mod error;
pub mod ignore_file;
pub mod language;
pub mod output;
pub mod patterns;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{TreedocError, WalkError, exit_code};
pub use ignore_file::{DEFAULT_IGNORE_FILE, load_ignore_patterns};
pub use output::{
    MarkdownFormatter, OutputConfig, OutputFormat, TreeFormatter, render_tree_lines, write_output,
};
pub use patterns::{PatternList, matches_ignore, matches_skip_content};
pub use tree::{BuildConfig, BuildOutput, TreeBuilder, TreeNode};
