//! Zonefs: Virtual Filesystem Metadata Projection
//!
//! A read-only metadata layer over a content-addressed filesystem tree.
//! Paths are resolved per-process through a hierarchical namespace to
//! concrete nodes, which are classified and projected into uniform
//! metadata records.

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod process;
pub mod store;
pub mod tree;
pub mod types;
pub mod zone;
