//! Core types for the zonefs metadata projection layer.

/// NodeID: Deterministic hash of a filesystem node (file, directory or snapshot)
pub type NodeID = [u8; 32];

/// Hash: Generic 256-bit hash value
pub type Hash = [u8; 32];
