//! Filesystem tree model
//!
//! Nodes are immutable values identified by the blake3 hash of their
//! serialized form. A zone is a bag of such nodes; directories reference
//! children by id, so a whole tree is reachable from a single root id.

pub mod hasher;
pub mod node;

pub use hasher::compute_node_id;
pub use node::{DirEntry, DirectoryNode, FileNode, Node, SnapshotNode};
