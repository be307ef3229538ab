//! Filesystem node types

use crate::types::{Hash, NodeID};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File node representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    pub size: u64,
    pub content_hash: Hash,
    pub metadata: BTreeMap<String, String>,
}

impl FileNode {
    /// Byte length of the file content
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// One named child of a directory
///
/// `mod_time` is nanoseconds since the Unix epoch. The entry, not the child
/// node, is the authority for a child's modification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: String,
    pub node_id: NodeID,
    pub mod_time: i64,
}

/// Directory node representation
///
/// Entries keep their stored (insertion) order; enumeration must preserve it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub entries: Vec<DirEntry>,
    pub metadata: BTreeMap<String, String>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        DirectoryNode {
            entries: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Look up a child entry by name
    pub fn entry(&self, name: &str) -> Option<&DirEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl Default for DirectoryNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot record: a named, timestamped pointer at a directory root
///
/// Zones store snapshots alongside files and directories, but a snapshot is
/// not a valid target for metadata queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub root: NodeID,
    pub created: i64,
    pub metadata: BTreeMap<String, String>,
}

/// Filesystem node
///
/// Closed sum over everything a zone can hold. Code classifying nodes must
/// match exhaustively and reject variants it does not handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
    Snapshot(SnapshotNode),
}

impl Node {
    /// Variant name, used in diagnostics and integrity errors
    pub fn kind(&self) -> &'static str {
        match self {
            Node::File(_) => "file",
            Node::Directory(_) => "directory",
            Node::Snapshot(_) => "snapshot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_entries_keep_insertion_order() {
        let mut dir = DirectoryNode::new();
        for name in ["zebra", "apple", "mango"] {
            dir.entries.push(DirEntry {
                name: name.to_string(),
                node_id: [0u8; 32],
                mod_time: 0,
            });
        }

        let names: Vec<&str> = dir.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn entry_lookup_by_name() {
        let mut dir = DirectoryNode::new();
        dir.entries.push(DirEntry {
            name: "a.txt".to_string(),
            node_id: [7u8; 32],
            mod_time: 5,
        });

        assert_eq!(dir.entry("a.txt").unwrap().node_id, [7u8; 32]);
        assert!(dir.entry("missing").is_none());
    }

    #[test]
    fn node_kind_names() {
        let file = Node::File(FileNode {
            size: 1,
            content_hash: [0u8; 32],
            metadata: BTreeMap::new(),
        });
        let dir = Node::Directory(DirectoryNode::new());
        let snap = Node::Snapshot(SnapshotNode {
            root: [0u8; 32],
            created: 0,
            metadata: BTreeMap::new(),
        });

        assert_eq!(file.kind(), "file");
        assert_eq!(dir.kind(), "directory");
        assert_eq!(snap.kind(), "snapshot");
    }
}
