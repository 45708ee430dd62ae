//! Filesystem node types.

use crate::types::{DirId, FileId};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Directory node owning named child directories and files through id maps.
///
/// The child maps are the sole ownership link: a node is reachable from
/// exactly one parent, and `parent` always names the directory whose map
/// currently contains the node. Maps iterate in insertion order so listing
/// and search output are deterministic.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    /// Name of the directory; the root is the unique node with an empty name.
    pub name: String,

    /// Owning directory; `None` only for the root.
    pub parent: Option<DirId>,

    /// Child directories keyed by name.
    pub child_directories: IndexMap<String, DirId>,

    /// Child files keyed by name.
    pub files: IndexMap<String, FileId>,

    /// Highest suffix index issued per base name. Never decremented, even
    /// when the entry that earned the suffix is removed.
    pub duplicate_count: HashMap<String, u32>,
}

impl DirectoryNode {
    pub fn new(parent: Option<DirId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent,
            child_directories: IndexMap::new(),
            files: IndexMap::new(),
            duplicate_count: HashMap::new(),
        }
    }

    /// Whether `name` exists at this level as either node kind.
    pub fn has_child(&self, name: &str) -> bool {
        self.child_directories.contains_key(name) || self.files.contains_key(name)
    }
}

/// File node: a leaf holding opaque string content.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    pub parent: DirId,
    pub content: String,
}

impl FileNode {
    pub fn new(parent: DirId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent,
            content: String::new(),
        }
    }
}
