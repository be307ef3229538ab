//! Sled-backed node store

use super::NodeStore;
use crate::error::StorageError;
use crate::types::NodeID;
use std::path::Path;

/// Durable node store on a sled database
///
/// Keys are the raw 32-byte NodeIDs. Nodes are content-addressed and
/// immutable, so overwrites are always byte-identical.
pub struct SledNodeStore {
    db: sled::Db,
}

impl SledNodeStore {
    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(SledNodeStore { db })
    }

    /// Wrap an already-open database
    pub fn from_db(db: sled::Db) -> Self {
        SledNodeStore { db }
    }
}

impl NodeStore for SledNodeStore {
    fn get(&self, node_id: &NodeID) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(node_id)?.map(|ivec| ivec.to_vec()))
    }

    fn put(&self, node_id: &NodeID, bytes: &[u8]) -> Result<(), StorageError> {
        self.db.insert(node_id, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sled_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SledNodeStore::open(&dir.path().join("nodes")).unwrap();
        let id: NodeID = [9u8; 32];

        assert!(store.get(&id).unwrap().is_none());
        store.put(&id, b"persisted").unwrap();
        assert_eq!(store.get(&id).unwrap().unwrap(), b"persisted");
    }
}
