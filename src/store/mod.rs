//! Node Store
//!
//! Raw byte storage for serialized filesystem nodes, keyed by NodeID.
//! The zone layer sits on top and owns encoding; stores only move bytes.

pub mod persistence;

use crate::error::StorageError;
use crate::types::NodeID;
use parking_lot::RwLock;
use std::collections::HashMap;

pub use persistence::SledNodeStore;

/// Node store interface
pub trait NodeStore {
    /// Fetch the serialized bytes for a node, if present
    fn get(&self, node_id: &NodeID) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store the serialized bytes for a node
    fn put(&self, node_id: &NodeID, bytes: &[u8]) -> Result<(), StorageError>;
}

/// In-memory node store
///
/// Backs ephemeral zones and tests. The lock exists only because the store
/// API takes `&self`; queries themselves are single-threaded.
pub struct MemoryNodeStore {
    nodes: RwLock<HashMap<NodeID, Vec<u8>>>,
}

impl MemoryNodeStore {
    pub fn new() -> Self {
        MemoryNodeStore {
            nodes: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored nodes
    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }
}

impl Default for MemoryNodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore for MemoryNodeStore {
    fn get(&self, node_id: &NodeID) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.nodes.read().get(node_id).cloned())
    }

    fn put(&self, node_id: &NodeID, bytes: &[u8]) -> Result<(), StorageError> {
        self.nodes.write().insert(*node_id, bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryNodeStore::new();
        let id: NodeID = [1u8; 32];

        assert!(store.get(&id).unwrap().is_none());
        store.put(&id, b"payload").unwrap();
        assert_eq!(store.get(&id).unwrap().unwrap(), b"payload");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_store_put_is_idempotent_per_key() {
        let store = MemoryNodeStore::new();
        let id: NodeID = [2u8; 32];

        store.put(&id, b"one").unwrap();
        store.put(&id, b"one").unwrap();
        assert_eq!(store.len(), 1);
    }
}
