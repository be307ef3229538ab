//! Zone: the namespace handle
//!
//! A zone owns a node store and the codec for it: nodes go in and out as
//! typed values, identified by the blake3 hash of their bincode encoding.
//! Loading is the only operation metadata queries need; saving exists so
//! trees can be built and for the write-side collaborators of this crate.

use crate::error::StorageError;
use crate::store::{MemoryNodeStore, NodeStore};
use crate::tree::{compute_node_id, Node};
use crate::types::NodeID;

/// Handle to one node namespace
pub struct Zone {
    store: Box<dyn NodeStore>,
}

impl Zone {
    pub fn new(store: Box<dyn NodeStore>) -> Self {
        Zone { store }
    }

    /// Ephemeral zone over an in-memory store
    pub fn in_memory() -> Self {
        Zone::new(Box::new(MemoryNodeStore::new()))
    }

    /// Load and decode the node identified by `node_id`
    ///
    /// A missing id is `MissingNode`; bytes that fail to decode are
    /// `Corrupt`. Both carry the hex id.
    pub fn load(&self, node_id: &NodeID) -> Result<Node, StorageError> {
        let bytes = self
            .store
            .get(node_id)?
            .ok_or_else(|| StorageError::MissingNode(hex::encode(node_id)))?;
        bincode::deserialize(&bytes).map_err(|e| StorageError::Corrupt {
            id: hex::encode(node_id),
            reason: e.to_string(),
        })
    }

    /// Encode and store `node`, returning its content-addressed id
    pub fn save(&self, node: &Node) -> Result<NodeID, StorageError> {
        let bytes = bincode::serialize(node).map_err(|e| StorageError::Encode(e.to_string()))?;
        let node_id = compute_node_id(&bytes);
        self.store.put(&node_id, &bytes)?;
        Ok(node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::tree::{DirectoryNode, FileNode, Node};
    use std::collections::BTreeMap;

    fn file(size: u64) -> Node {
        Node::File(FileNode {
            size,
            content_hash: [0u8; 32],
            metadata: BTreeMap::new(),
        })
    }

    #[test]
    fn save_then_load_returns_equivalent_node() {
        let zone = Zone::in_memory();
        let id = zone.save(&file(42)).unwrap();

        match zone.load(&id).unwrap() {
            Node::File(f) => assert_eq!(f.size(), 42),
            other => panic!("expected file, got {}", other.kind()),
        }
    }

    #[test]
    fn identical_nodes_share_an_id() {
        let zone = Zone::in_memory();
        let a = zone.save(&file(7)).unwrap();
        let b = zone.save(&file(7)).unwrap();
        assert_eq!(a, b);

        let c = zone.save(&Node::Directory(DirectoryNode::new())).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn load_of_unknown_id_is_missing_node() {
        let zone = Zone::in_memory();
        let err = zone.load(&[0xAAu8; 32]).unwrap_err();
        assert!(matches!(err, StorageError::MissingNode(_)));
    }

    #[test]
    fn load_of_garbage_bytes_is_corrupt() {
        let store = MemoryNodeStore::new();
        let id: NodeID = [3u8; 32];
        store.put(&id, &[0xFF; 3]).unwrap();

        let zone = Zone::new(Box::new(store));
        let err = zone.load(&id).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
