//! Hash computation for filesystem nodes

use crate::types::NodeID;

/// Compute the NodeID for a node's serialized bytes
///
/// Identity is content-addressed: two nodes with identical encodings share
/// an id, so an unchanged subtree is stored once.
pub fn compute_node_id(encoded: &[u8]) -> NodeID {
    *blake3::hash(encoded).as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_same_id() {
        assert_eq!(compute_node_id(b"abc"), compute_node_id(b"abc"));
    }

    #[test]
    fn different_bytes_different_id() {
        assert_ne!(compute_node_id(b"abc"), compute_node_id(b"abd"));
    }
}
