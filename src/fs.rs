//! Filesystem metadata queries
//!
//! The projection layer: resolve a path, load the node it names, and
//! normalize whatever comes back into a [`FileInfo`] record. Directories
//! additionally enumerate their children, re-projecting each one.
//!
//! Everything here is a pure read; no query mutates the zone.

use crate::error::FsError;
use crate::process::Process;
use crate::tree::Node;
use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

/// File mode bits
///
/// Only the directory bit is assigned today; the representation leaves room
/// for the usual OS mode bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileMode(u32);

impl FileMode {
    /// Directory bit
    pub const DIR: FileMode = FileMode(1 << 31);

    pub const fn empty() -> Self {
        FileMode(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: FileMode) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_dir(self) -> bool {
        self.contains(FileMode::DIR)
    }
}

/// Normalized metadata for one filesystem node
///
/// Produced fresh per query and discarded after use. The record keeps the
/// node it was projected from, so a caller can re-interrogate it (say, to
/// enumerate a directory) without resolving the path again.
#[derive(Debug, Clone)]
pub struct FileInfo {
    name: String,
    size: u64,
    mode: FileMode,
    mod_time: Option<DateTime<Utc>>,
    node: Node,
}

impl FileInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte length; meaningful only for files, 0 for directories
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// Modification time. `None` on records from a standalone [`stat`]; set
    /// only when the record was produced as a child of [`read_dir`], from
    /// the parent directory's entry. That asymmetry is contractual.
    pub fn mod_time(&self) -> Option<DateTime<Utc>> {
        self.mod_time
    }

    pub fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }

    /// The node this record was projected from
    pub fn node(&self) -> &Node {
        &self.node
    }
}

/// Query metadata for the node at `path`
///
/// Resolution and load errors propagate unchanged. A node that is neither a
/// file nor a directory is a data-integrity fault and fails with
/// [`FsError::InvalidElement`] naming the variant.
pub fn stat(process: &Process, path: &str) -> Result<FileInfo, FsError> {
    let segments = process.resolve_path(path)?;
    let last = segments
        .last()
        .ok_or_else(|| FsError::NotFound(path.to_string()))?;

    let node = process.fs.zone.load(&last.node_id)?;
    let (size, mode) = match &node {
        Node::Directory(_) => (0, FileMode::DIR),
        Node::File(file) => (file.size(), FileMode::empty()),
        Node::Snapshot(_) => return Err(FsError::InvalidElement(node.kind())),
    };

    debug!(path, kind = node.kind(), "stat");
    Ok(FileInfo {
        name: last.name.clone(),
        size,
        mode,
        mod_time: None,
        node,
    })
}

/// Enumerate the directory at `dir_path`
///
/// Children come back in the directory's stored entry order, each with its
/// `mod_time` taken from the parent's entry (nanoseconds since epoch).
/// Enumeration is fail-fast: the first child that fails to resolve or
/// project aborts the whole listing; there is no partial result.
pub fn read_dir(process: &Process, dir_path: &str) -> Result<Vec<FileInfo>, FsError> {
    let info = stat(process, dir_path)?;
    let dir = match info.node() {
        Node::Directory(dir) => dir,
        _ => return Err(FsError::NotADirectory(dir_path.to_string())),
    };

    debug!(dir_path, children = dir.entries.len(), "read_dir");
    let mut result = Vec::with_capacity(dir.entries.len());
    for entry in &dir.entries {
        // Naive single-separator composition; the resolver skips the empty
        // components this can produce.
        let mut child = stat(process, &format!("{}/{}", dir_path, entry.name))?;
        child.mod_time = Some(Utc.timestamp_nanos(entry.mod_time));
        result.push(child);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_bits() {
        assert!(FileMode::DIR.is_dir());
        assert!(!FileMode::empty().is_dir());
        assert!(FileMode::DIR.contains(FileMode::empty()));
        assert_eq!(FileMode::empty().bits(), 0);
    }
}
