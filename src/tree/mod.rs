//! Directory tree building
//!
//! `TreeBuilder` walks a scan root depth-first and produces a `TreeNode`
//! tree together with the sorted list of files whose contents belong in the
//! generated document.

mod builder;
mod config;
mod node;

pub use builder::{BuildOutput, TreeBuilder, slash_path};
pub use config::BuildConfig;
pub use node::TreeNode;
