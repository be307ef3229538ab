//! Process context and path resolution
//!
//! A process is bound to one filesystem zone and a root node, and carries a
//! working directory for relative paths. Resolution walks directory entries
//! from the root, one component at a time, yielding the chain of path
//! segments it traversed. The final node is never loaded here; classifying
//! it is the caller's business.

use crate::error::FsError;
use crate::tree::Node;
use crate::types::NodeID;
use crate::zone::Zone;
use tracing::trace;

/// One step of path resolution
#[derive(Debug, Clone)]
pub struct PathSegment {
    pub name: String,
    pub node_id: NodeID,
}

/// A process's view of a filesystem: zone plus root node
pub struct FsHandle {
    pub zone: Zone,
    pub root: NodeID,
}

/// Process context for filesystem queries
pub struct Process {
    pub fs: FsHandle,
    wd: String,
}

impl Process {
    /// Create a process rooted at `fs` with working directory `/`
    pub fn new(fs: FsHandle) -> Self {
        Process {
            fs,
            wd: "/".to_string(),
        }
    }

    /// Current working directory
    pub fn wd(&self) -> &str {
        &self.wd
    }

    /// Change the working directory used for relative paths
    ///
    /// No validation happens here; a bad directory surfaces on the next
    /// resolution.
    pub fn set_wd(&mut self, wd: impl Into<String>) {
        self.wd = wd.into();
    }

    /// Resolve `path` to an ordered chain of path segments
    ///
    /// Relative paths are joined under the working directory. Empty
    /// components and `.` are skipped, `..` pops (never above the root), so
    /// duplicate separators from textual path composition are harmless.
    /// The returned chain always starts with the root segment; the last
    /// segment is the resolution target.
    pub fn resolve_path(&self, path: &str) -> Result<Vec<PathSegment>, FsError> {
        if path.contains('\0') {
            return Err(FsError::InvalidPath(path.to_string()));
        }

        let full = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("{}/{}", self.wd, path)
        };

        let mut segments = vec![PathSegment {
            name: "/".to_string(),
            node_id: self.fs.root,
        }];

        for component in full.split('/') {
            match component {
                "" | "." => continue,
                ".." => {
                    if segments.len() > 1 {
                        segments.pop();
                    }
                }
                name => {
                    let current_id = match segments.last() {
                        Some(seg) => seg.node_id,
                        None => self.fs.root,
                    };
                    let dir = match self.fs.zone.load(&current_id)? {
                        Node::Directory(dir) => dir,
                        _ => return Err(FsError::NotADirectory(walked_path(&segments))),
                    };
                    let entry = dir
                        .entry(name)
                        .ok_or_else(|| FsError::NotFound(full.clone()))?;
                    segments.push(PathSegment {
                        name: entry.name.clone(),
                        node_id: entry.node_id,
                    });
                }
            }
        }

        trace!(path, segments = segments.len(), "resolved path");
        Ok(segments)
    }
}

/// Textual form of the path walked so far, for diagnostics
fn walked_path(segments: &[PathSegment]) -> String {
    let joined = segments
        .iter()
        .skip(1)
        .fold(String::new(), |mut acc, seg| {
            acc.push('/');
            acc.push_str(&seg.name);
            acc
        });
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}
